// src/view_models.rs

use serde_json::Value;

const PROMPT_KEYS: [&str; 4] = ["prompt", "question", "text", "title"];
const OPTION_KEYS: [&str; 3] = ["options", "answers", "choices"];
const IMG_KEYS: [&str; 2] = ["img", "image"];

/// Lo que la vista de quiz necesita de una pregunta cuya forma no controlamos.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub prompt: String,
    pub options: Vec<String>,
    pub img: Option<String>,
}

fn first_str<'a>(question: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| question.get(*k).and_then(Value::as_str))
}

fn option_label(option: &Value) -> String {
    match option {
        Value::String(s) => s.clone(),
        Value::Object(_) => first_str(option, &["text", "label", "value"])
            .map(str::to_string)
            .unwrap_or_else(|| option.to_string()),
        other => other.to_string(),
    }
}

impl QuestionView {
    pub fn from_value(index: usize, question: &Value) -> Self {
        let prompt = match question {
            Value::String(s) => s.clone(),
            _ => first_str(question, &PROMPT_KEYS)
                .map(str::to_string)
                .unwrap_or_else(|| question.to_string()),
        };

        let options = OPTION_KEYS
            .iter()
            .find_map(|k| question.get(*k).and_then(Value::as_array))
            .map(|opts| opts.iter().map(option_label).collect())
            .unwrap_or_default();

        Self {
            number: index + 1,
            prompt,
            options,
            img: first_str(question, &IMG_KEYS).map(str::to_string),
        }
    }
}

/// Fila del resumen final.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerRow {
    pub position: usize,
    pub question_number: Option<usize>,
    pub answer: String,
}

impl AnswerRow {
    pub fn from_value(position: usize, answer: &Value) -> Self {
        let question_number = answer
            .get("question")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|n| n.checked_add(1));
        let answer = match answer.get("answer") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => match answer {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        };
        Self {
            position: position + 1,
            question_number,
            answer,
        }
    }
}
