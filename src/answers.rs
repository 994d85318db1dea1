//! The answer set: question id to chosen option score.

use crate::content::{Content, MAX_OPTION_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("score {score} for question {question:?} is outside 0..={max}", max = MAX_OPTION_SCORE)]
    ScoreOutOfRange { question: String, score: u8 },
}

/// Mapping from question id to the chosen option's score (0-3).
///
/// Keys are kept sorted so the serialized form is canonical regardless of the
/// order answers were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct AnswerSet {
    scores: BTreeMap<String, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question in `content` answered with `score`.
    pub fn filled(content: &Content, score: u8) -> Self {
        let score = score.min(MAX_OPTION_SCORE);
        Self {
            scores: content
                .question_ids()
                .map(|id| (id.to_string(), score))
                .collect(),
        }
    }

    pub fn insert(&mut self, question: impl Into<String>, score: u8) -> Result<(), AnswerError> {
        let question = question.into();
        if score > MAX_OPTION_SCORE {
            return Err(AnswerError::ScoreOutOfRange { question, score });
        }
        self.scores.insert(question, score);
        Ok(())
    }

    pub fn get(&self, question: &str) -> Option<u8> {
        self.scores.get(question).copied()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.scores.contains_key(question)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// True when every question of `content` has an answer.
    pub fn is_complete(&self, content: &Content) -> bool {
        content.question_ids().all(|id| self.contains(id))
    }

    /// Number of `content` questions answered.
    pub fn answered_in(&self, content: &Content) -> usize {
        content.question_ids().filter(|id| self.contains(id)).count()
    }

    /// Drop ids that `content` does not declare. Returns how many were dropped.
    pub fn retain_known(&mut self, content: &Content) -> usize {
        let before = self.scores.len();
        self.scores.retain(|id, _| content.question(id).is_some());
        before - self.scores.len()
    }
}

impl TryFrom<BTreeMap<String, u8>> for AnswerSet {
    type Error = AnswerError;

    fn try_from(scores: BTreeMap<String, u8>) -> Result<Self, Self::Error> {
        let mut answers = AnswerSet::new();
        for (question, score) in scores {
            answers.insert(question, score)?;
        }
        Ok(answers)
    }
}

impl From<AnswerSet> for BTreeMap<String, u8> {
    fn from(answers: AnswerSet) -> Self {
        answers.scores
    }
}
