//! Score-pattern detection.
//!
//! Each [`PatternRule`] is a tagged, pure predicate over the fixed
//! [`DimensionScores`] shape. The detector only iterates; adding a rule means
//! adding a table entry, nothing here changes.

use crate::scoring::DimensionScores;
use serde::Serialize;
use std::fmt;

/// A named diagnostic flag triggered by a relationship among dimension scores.
#[derive(Clone, Copy, Serialize)]
pub struct PatternRule {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub detect: fn(&DimensionScores) -> bool,
    pub description: &'static str,
}

impl PatternRule {
    pub fn matches(&self, scores: &DimensionScores) -> bool {
        (self.detect)(scores)
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PatternRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PatternRule {}

/// Every rule whose predicate holds, in declaration order.
pub fn detect_patterns<'a>(scores: &DimensionScores, rules: &'a [PatternRule]) -> Vec<&'a PatternRule> {
    rules.iter().filter(|rule| rule.matches(scores)).collect()
}
