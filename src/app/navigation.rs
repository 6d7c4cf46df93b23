use super::*;
use serde_json::json;

impl QuizApp {
    pub fn empezar_quiz(&mut self) {
        if !self.store.session().has_questions() {
            self.message = "⚠ No hay preguntas cargadas.".into();
            return;
        }
        self.message.clear();
        self.input.clear();
        self.store.reset_answers();
        self.ir_a_pregunta(0);
        self.store.set_stage(AppState::Quiz);
    }

    /// Guarda la respuesta de la pregunta actual y pasa a la siguiente.
    pub fn responder(&mut self, respuesta: &str) {
        let Some(idx) = self.store.session().current_question else {
            self.message = "Error interno: no hay pregunta seleccionada.".into();
            return;
        };
        if respuesta.trim().is_empty() {
            self.message = "⚠ Debes escribir una respuesta antes de enviar.".into();
            return;
        }

        self.store
            .add_answer(json!({ "question": idx, "answer": respuesta.trim() }));
        self.message.clear();
        self.input.clear();
        self.avanzar_a_siguiente_pregunta();
    }

    /// Avanza sin registrar respuesta.
    pub fn saltar_pregunta(&mut self) {
        self.message.clear();
        self.input.clear();
        self.avanzar_a_siguiente_pregunta();
    }

    pub fn volver_al_inicio(&mut self) {
        self.message.clear();
        self.input.clear();
        self.store.reset_answers();
        self.store.set_current_question(None);
        self.store.set_img(None);
        self.store.set_stage(AppState::Welcome);
    }

    fn avanzar_a_siguiente_pregunta(&mut self) {
        let next = self
            .store
            .session()
            .current_question
            .map_or(0, |idx| idx + 1);

        if next < self.store.session().questions.len() {
            self.ir_a_pregunta(next);
        } else {
            // Fin del quiz
            self.store.set_current_question(None);
            self.store.set_img(None);
            self.store.set_stage(AppState::Summary);
        }
    }

    fn ir_a_pregunta(&mut self, idx: usize) {
        self.store.set_current_question(idx);
        let img = self.current_view().and_then(|v| v.img);
        self.store.set_img(img);
    }
}
