// src/config.rs

pub const DEFAULT_QUIZ_URL: &str = "http://127.0.0.1:8787/quiz.json";
pub const DEFAULT_TITLE: &str = "Quiz";

const URL_ENV: &str = "QUIZ_STORE_URL";
const TITLE_ENV: &str = "QUIZ_STORE_TITLE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub url: String,
    pub title: String,
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ViewerConfig {
    /// Orden: argumento de línea de comandos, variable de entorno, valor por defecto.
    pub fn resolve(
        arg_url: Option<String>,
        env_url: Option<String>,
        env_title: Option<String>,
    ) -> Self {
        let url = normalize(arg_url)
            .or_else(|| normalize(env_url))
            .unwrap_or_else(|| DEFAULT_QUIZ_URL.to_string());
        let title = normalize(env_title).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self { url, title }
    }

    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(URL_ENV).ok(),
            std::env::var(TITLE_ENV).ok(),
        )
    }
}
