use thiserror::Error;

/// Errores de la carga remota del quiz.
#[derive(Debug, Error)]
pub enum StoreError {
    /// La petición HTTP no llegó a completarse (red caída, conexión rechazada, body cortado...).
    #[error("error de transporte al cargar el quiz: {0}")]
    Transport(#[from] reqwest::Error),
    /// El body no es JSON o no trae `{ "record": { "version", "questions" } }`.
    #[error("respuesta del quiz no válida: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_))
    }

    #[cfg(test)]
    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse(_))
    }
}
