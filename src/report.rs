//! The computed results bundle every renderer consumes.

use crate::answers::AnswerSet;
use crate::content::{Content, DimensionId, Stage};
use crate::patterns::{detect_patterns, PatternRule};
use crate::scoring::{calculate_results, DimensionScores};
use serde::Serialize;

/// One dimension's score next to the name and ceiling it is shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSummary {
    pub id: DimensionId,
    pub name: &'static str,
    pub score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResults {
    pub answered: usize,
    pub question_count: usize,
    pub dimension_scores: DimensionScores,
    /// Per-dimension breakdown in content order.
    pub dimensions: Vec<DimensionSummary>,
    pub total_score: u32,
    pub max_score: u32,
    pub stage: &'static Stage,
    pub patterns: Vec<&'static PatternRule>,
}

impl AssessmentResults {
    /// Score the answers, then classify the stage and detect patterns.
    pub fn compute(content: &Content, answers: &AnswerSet) -> Self {
        let card = calculate_results(content, answers);
        let stage = content.stage_for(card.total_score);
        let patterns = detect_patterns(&card.dimension_scores, content.patterns());

        tracing::debug!(
            total = card.total_score,
            stage = stage.id,
            patterns = patterns.len(),
            "computed assessment results"
        );

        let dimensions = content
            .dimensions()
            .iter()
            .map(|d| DimensionSummary {
                id: d.id,
                name: d.name,
                score: card.dimension_scores.get(d.id),
                max_score: content.max_dimension_score(),
            })
            .collect();

        Self {
            answered: answers.answered_in(content),
            question_count: content.question_count(),
            dimension_scores: card.dimension_scores,
            dimensions,
            total_score: card.total_score,
            max_score: content.max_total(),
            stage,
            patterns,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.question_count
    }
}
