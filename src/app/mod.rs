use crate::error::StoreError;
use crate::model::AppState;
use crate::store::QuizStore;
use crate::view_models::{AnswerRow, QuestionView};
use eframe::egui;

// Submódulos
pub mod navigation;

/// Texto que se enseña en la bienvenida cuando falla la carga inicial.
pub fn load_error_message(err: &StoreError, url: &str) -> String {
    if err.is_transport() {
        format!("No se pudo conectar con {url}. ¿Está levantado el servidor? ({err})")
    } else {
        format!("{url} no devolvió un quiz válido ({err})")
    }
}

pub struct QuizApp {
    pub store: QuizStore<AppState>,
    pub message: String,
    pub input: String,
    pub load_error: Option<String>,
}

impl QuizApp {
    /// `load_error` es el error de la carga inicial, si la hubo; se enseña en la bienvenida.
    pub fn new(store: QuizStore<AppState>, load_error: Option<String>) -> Self {
        Self {
            store,
            message: String::new(),
            input: String::new(),
            load_error,
        }
    }

    /// Repinta la ventana cada vez que cambia algo en el store.
    pub fn with_repaint_on_change(mut self, ctx: egui::Context) -> Self {
        self.store.subscribe(move |_, _| ctx.request_repaint());
        self
    }

    pub fn stage(&self) -> AppState {
        self.store.session().stage.unwrap_or_default()
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        let session = self.store.session();
        let idx = session.current_question?;
        session
            .questions
            .get(idx)
            .map(|q| QuestionView::from_value(idx, q))
    }

    pub fn answer_rows(&self) -> Vec<AnswerRow> {
        self.store
            .session()
            .answers
            .iter()
            .enumerate()
            .map(|(i, a)| AnswerRow::from_value(i, a))
            .collect()
    }
}
