use serde::Serialize;
use serde_json::Value;

/// Versión del quiz tal como la manda el servidor (cualquier valor JSON, `Null` = sin fijar).
pub type QuizVersion = Value;
/// La forma de una pregunta la define quien sirve el quiz.
pub type Question = Value;
/// La forma de una respuesta la define la UI que la recoge.
pub type Answer = Value;

/// Fases de la UI del visor. El store las trata como un valor opaco.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Welcome,
    Quiz,
    Summary,
}

/// Campos de la sesión, usados para avisar a los observadores de qué ha cambiado.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum Field {
    QuizVersion,
    Stage,
    Title,
    Img,
    Questions,
    CurrentQuestion,
    Answers,
}

/// Estado completo de una sesión de quiz.
///
/// `S` es la fase de la UI; el store la guarda pero nunca la interpreta.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QuizSession<S> {
    pub quiz_version: QuizVersion,
    pub stage: Option<S>,
    pub title: Option<String>,
    pub img: Option<String>,
    pub questions: Vec<Question>, // orden del servidor
    pub current_question: Option<usize>,
    pub answers: Vec<Answer>, // orden de recogida
}

impl<S> Default for QuizSession<S> {
    fn default() -> Self {
        Self {
            quiz_version: Value::Null,
            stage: None,
            title: None,
            img: None,
            questions: Vec::new(),
            current_question: None,
            answers: Vec::new(),
        }
    }
}

impl<S> QuizSession<S> {
    /// Pregunta apuntada por `current_question`, si el índice existe.
    pub fn current(&self) -> Option<&Question> {
        self.current_question.and_then(|n| self.questions.get(n))
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_session_is_empty() {
        let session: QuizSession<String> = QuizSession::default();
        assert_eq!(session.quiz_version, Value::Null);
        assert_eq!(session.stage, None);
        assert_eq!(session.title, None);
        assert_eq!(session.img, None);
        assert!(session.questions.is_empty());
        assert_eq!(session.current_question, None);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn current_resolves_index_without_clamping() {
        let mut session: QuizSession<String> = QuizSession::default();
        session.questions = vec![json!({"id": 1}), json!({"id": 2})];
        assert_eq!(session.current(), None);

        session.current_question = Some(1);
        assert_eq!(session.current(), Some(&json!({"id": 2})));

        session.current_question = Some(7);
        assert_eq!(session.current(), None);
        assert_eq!(session.current_question, Some(7));
    }

    #[test]
    fn snapshot_serializes_with_null_defaults() {
        let session: QuizSession<String> = QuizSession::default();
        let snapshot = serde_json::to_value(&session).unwrap();
        assert_eq!(
            snapshot,
            json!({
                "quiz_version": null,
                "stage": null,
                "title": null,
                "img": null,
                "questions": [],
                "current_question": null,
                "answers": [],
            })
        );
    }
}
