use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::error::StoreError;
use crate::model::{Question, QuizVersion};
use crate::store::QuizStore;

/// Forma esperada de la respuesta: `{ "record": { "version": .., "questions": [..], .. } }`.
#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub record: QuizRecord,
}

/// Solo se leen `version` y `questions`; el resto de campos se ignora.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuizRecord {
    pub version: QuizVersion,
    pub questions: Vec<Question>,
}

/// Parsea el body completo de la respuesta.
pub fn parse_record(body: &[u8]) -> Result<QuizRecord, StoreError> {
    let payload: QuizPayload = serde_json::from_slice(body)?;
    Ok(payload.record)
}

/// GET a `url` sin cabeceras extra, sin timeout y sin reintentos.
///
/// El status HTTP no se comprueba: un 404 con un body válido cuenta como éxito.
pub async fn fetch_record(client: &Client, url: &str) -> Result<QuizRecord, StoreError> {
    debug!("cargando quiz desde {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("el servidor del quiz devolvió HTTP {status} en {url}");
    }

    let body = response.bytes().await?;
    parse_record(&body)
}

impl<S> QuizStore<S> {
    /// Aplica un record ya cargado: primero la versión, luego las preguntas.
    pub fn apply_record(&mut self, record: QuizRecord) {
        self.set_quiz_version(record.version);
        self.set_questions(record.questions);
    }

    /// Carga el quiz de `url` con un cliente nuevo.
    pub async fn fetch_data(&mut self, url: &str) -> Result<(), StoreError> {
        self.fetch_data_with(&Client::new(), url).await
    }

    /// Como [`QuizStore::fetch_data`] pero reutilizando `client`.
    ///
    /// La sesión no se toca hasta que el body se ha parseado entero, así que si falla
    /// la red o el JSON la versión y las preguntas se quedan como estaban. El préstamo
    /// `&mut self` impide lanzar dos cargas a la vez sobre el mismo store.
    pub async fn fetch_data_with(&mut self, client: &Client, url: &str) -> Result<(), StoreError> {
        let record = fetch_record(client, url).await?;
        debug!(
            "quiz cargado: versión {}, {} preguntas",
            record.version,
            record.questions.len()
        );
        self.apply_record(record);
        Ok(())
    }
}
