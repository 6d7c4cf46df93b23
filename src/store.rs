use std::fmt;

use log::debug;

use crate::model::{Answer, Field, Question, QuizSession, QuizVersion};

/// Identificador devuelto por [`QuizStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn FnMut(&QuizSession<S>, Field)>;

/// Dueño de la sesión del quiz.
///
/// Solo se puede cambiar la sesión con los métodos `set_*`, `add_answer` y
/// `reset_answers`; cada uno avisa a los observadores después de aplicar el cambio.
/// Nada se valida: el store guarda exactamente lo que recibe.
pub struct QuizStore<S> {
    session: QuizSession<S>,
    observers: Vec<(SubscriptionId, Observer<S>)>,
    next_id: u64,
}

impl<S> Default for QuizStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug> fmt::Debug for QuizStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizStore")
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S> QuizStore<S> {
    pub fn new() -> Self {
        Self {
            session: QuizSession::default(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn session(&self) -> &QuizSession<S> {
        &self.session
    }

    /// Registra un observador. Se llama en orden de suscripción tras cada mutación.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&QuizSession<S>, Field) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Devuelve `false` si el id ya no estaba suscrito.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, field: Field) {
        debug!("quiz store: cambio en {field:?}");
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.session, field);
        }
    }

    pub fn set_quiz_version(&mut self, version: impl Into<QuizVersion>) {
        self.session.quiz_version = version.into();
        self.notify(Field::QuizVersion);
    }

    pub fn set_stage(&mut self, stage: impl Into<Option<S>>) {
        self.session.stage = stage.into();
        self.notify(Field::Stage);
    }

    pub fn set_title(&mut self, title: impl Into<Option<String>>) {
        self.session.title = title.into();
        self.notify(Field::Title);
    }

    pub fn set_img(&mut self, img: impl Into<Option<String>>) {
        self.session.img = img.into();
        self.notify(Field::Img);
    }

    /// Sustituye la lista entera de preguntas.
    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.session.questions = questions;
        self.notify(Field::Questions);
    }

    /// No se comprueba que el índice exista en `questions`.
    pub fn set_current_question(&mut self, n: impl Into<Option<usize>>) {
        self.session.current_question = n.into();
        self.notify(Field::CurrentQuestion);
    }

    pub fn add_answer(&mut self, answer: impl Into<Answer>) {
        self.session.answers.push(answer.into());
        self.notify(Field::Answers);
    }

    pub fn set_answers(&mut self, answers: Vec<Answer>) {
        self.session.answers = answers;
        self.notify(Field::Answers);
    }

    pub fn reset_answers(&mut self) {
        self.session.answers.clear();
        self.notify(Field::Answers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Stage {
        Intro,
        Questions,
    }

    #[test]
    fn setters_store_last_value_untouched() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        store.set_quiz_version("v1");
        store.set_quiz_version(3);
        store.set_stage(Stage::Intro);
        store.set_stage(Stage::Questions);
        store.set_title("Capitales".to_string());
        store.set_img("https://example.org/a.png".to_string());
        store.set_current_question(42);

        let s = store.session();
        assert_eq!(s.quiz_version, json!(3));
        assert_eq!(s.stage, Some(Stage::Questions));
        assert_eq!(s.title.as_deref(), Some("Capitales"));
        assert_eq!(s.img.as_deref(), Some("https://example.org/a.png"));
        // sin clamp aunque no haya preguntas
        assert_eq!(s.current_question, Some(42));
    }

    #[test]
    fn nullable_fields_can_be_unset_again() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        store.set_stage(Stage::Intro);
        store.set_title("t".to_string());
        store.set_current_question(0);
        store.set_quiz_version("v1");

        store.set_stage(None);
        store.set_title(None);
        store.set_current_question(None);
        store.set_quiz_version(Value::Null);

        assert_eq!(store.session(), &QuizSession::default());
    }

    #[test]
    fn questions_then_current_question() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        store.set_questions(vec![json!({"id": 1}), json!({"id": 2})]);
        store.set_current_question(1);

        assert_eq!(store.session().questions.len(), 2);
        assert_eq!(store.session().current_question, Some(1));
        assert_eq!(store.session().current(), Some(&json!({"id": 2})));
    }

    #[test]
    fn answers_keep_call_order() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        store.add_answer("A");
        store.add_answer("B");
        assert_eq!(store.session().answers, vec![json!("A"), json!("B")]);

        for i in 0..5 {
            store.add_answer(i);
        }
        assert_eq!(store.session().answers.len(), 7);
        assert_eq!(store.session().answers[6], json!(4));

        store.reset_answers();
        assert!(store.session().answers.is_empty());
    }

    #[test]
    fn set_answers_replaces_everything() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        for a in ["x", "y", "z"] {
            store.add_answer(a);
        }
        store.set_answers(vec![json!({"q": 0, "a": "B"})]);
        assert_eq!(store.session().answers, vec![json!({"q": 0, "a": "B"})]);

        store.set_answers(Vec::new());
        assert!(store.session().answers.is_empty());
    }

    #[test]
    fn observers_see_new_state_in_subscription_order() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        store.subscribe(move |session, field| {
            first
                .borrow_mut()
                .push(format!("1:{field:?}:{}", session.answers.len()));
        });
        let second = Rc::clone(&log);
        store.subscribe(move |_, field| second.borrow_mut().push(format!("2:{field:?}")));

        store.add_answer("A");
        store.set_stage(Stage::Intro);

        assert_eq!(
            *log.borrow(),
            vec!["1:Answers:1", "2:Answers", "1:Stage:1", "2:Stage"]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *c.borrow_mut() += 1);

        store.reset_answers();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.reset_answers();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn every_mutation_notifies_once() {
        let mut store: QuizStore<Stage> = QuizStore::new();
        let fields = Rc::new(RefCell::new(Vec::new()));
        let f = Rc::clone(&fields);
        store.subscribe(move |_, field| f.borrow_mut().push(field));

        store.set_quiz_version("v");
        store.set_stage(Stage::Intro);
        store.set_title("t".to_string());
        store.set_img(None);
        store.set_questions(vec![]);
        store.set_current_question(0);
        store.add_answer("a");
        store.set_answers(vec![]);
        store.reset_answers();

        assert_eq!(
            *fields.borrow(),
            vec![
                Field::QuizVersion,
                Field::Stage,
                Field::Title,
                Field::Img,
                Field::Questions,
                Field::CurrentQuestion,
                Field::Answers,
                Field::Answers,
                Field::Answers,
            ]
        );
    }
}
