//! Canonical text form of an answer set: a JSON object keyed by question id.

use crate::answers::AnswerSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("answer text is not a JSON object of question scores: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_text(answers: &AnswerSet) -> Result<String, TextError> {
    Ok(serde_json::to_string(answers)?)
}

pub fn from_text(text: &str) -> Result<AnswerSet, TextError> {
    Ok(serde_json::from_str(text)?)
}
