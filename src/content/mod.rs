//! Static assessment content: dimensions, questions, stages and pattern rules.
//!
//! Everything in this module is `'static` reference data. It is declared once
//! and never mutated; the scoring, stage and pattern functions borrow from it.
//!
//! A [`Content`] bundles the three tables. [`Content::standard`] is the
//! built-in assessment (5 dimensions x 5 questions, 4 stages, 5 patterns).
//! Custom tables can be assembled with [`Content::new`], which validates the
//! structural invariants before handing the bundle out.

mod dimensions;
mod patterns;
mod stages;

use crate::patterns::PatternRule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub use dimensions::DIMENSIONS;
pub use patterns::PATTERNS;
pub use stages::STAGES;

/// Number of questions in every dimension.
pub const QUESTIONS_PER_DIMENSION: usize = 5;

/// Number of options offered by every question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Highest score a single option can carry.
pub const MAX_OPTION_SCORE: u8 = 3;

/// Highest score a single dimension can reach.
pub const MAX_DIMENSION_SCORE: u32 = QUESTIONS_PER_DIMENSION as u32 * MAX_OPTION_SCORE as u32;

/// The five fixed thematic groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionId {
    Compliance,
    Pentest,
    Architecture,
    Operations,
    Livecall,
}

impl DimensionId {
    pub const ALL: [DimensionId; 5] = [
        DimensionId::Compliance,
        DimensionId::Pentest,
        DimensionId::Architecture,
        DimensionId::Operations,
        DimensionId::Livecall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionId::Compliance => "compliance",
            DimensionId::Pentest => "pentest",
            DimensionId::Architecture => "architecture",
            DimensionId::Operations => "operations",
            DimensionId::Livecall => "livecall",
        }
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerOption {
    pub score: u8,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub title: &'static str,
    /// Context shown on demand ("Why this matters").
    pub why_it_matters: &'static str,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    pub fn option(&self, score: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.score == score)
    }
}

#[derive(Debug, Serialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: &'static str,
    pub intro: &'static str,
    pub questions: [Question; QUESTIONS_PER_DIMENSION],
}

impl Dimension {
    pub fn question_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.questions.iter().map(|q| q.id)
    }
}

/// A recommended focus area for a stage, optionally pointing at further reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FocusItem {
    Text(&'static str),
    Link {
        text: &'static str,
        url: &'static str,
    },
}

impl FocusItem {
    pub fn text(&self) -> &'static str {
        match self {
            FocusItem::Text(text) | FocusItem::Link { text, .. } => *text,
        }
    }

    pub fn url(&self) -> Option<&'static str> {
        match self {
            FocusItem::Text(_) => None,
            FocusItem::Link { url, .. } => Some(*url),
        }
    }
}

/// A readiness tier covering the inclusive total-score range `[low, high]`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub id: &'static str,
    pub name: &'static str,
    pub low: u32,
    pub high: u32,
    pub description: &'static str,
    pub typical_profile: &'static str,
    pub focus: &'static [FocusItem],
    pub defer: &'static [&'static str],
}

impl Stage {
    pub fn contains(&self, total: u32) -> bool {
        total >= self.low && total <= self.high
    }
}

/// A broken structural invariant in a content table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentViolation {
    #[error("expected {expected} dimensions, found {found}")]
    DimensionCount { expected: usize, found: usize },
    #[error("dimension {0} is declared more than once")]
    DuplicateDimension(DimensionId),
    #[error("question id {0:?} is declared more than once")]
    DuplicateQuestion(&'static str),
    #[error("question {question:?} option scores are {found:?}, expected exactly 0..=3")]
    OptionScores {
        question: &'static str,
        found: Vec<u8>,
    },
    #[error("no stages defined")]
    NoStages,
    #[error("stage {stage:?} has an inverted range [{low}, {high}]")]
    InvertedStage {
        stage: &'static str,
        low: u32,
        high: u32,
    },
    #[error("stage ranges leave a gap or overlap at {at}")]
    StagePartition { at: u32 },
    #[error("stage ranges end at {found}, expected {expected}")]
    StageCoverage { expected: u32, found: u32 },
}

/// The full reference data set an assessment runs against.
#[derive(Debug, Clone, Copy)]
pub struct Content {
    dimensions: &'static [Dimension],
    stages: &'static [Stage],
    patterns: &'static [PatternRule],
}

impl Content {
    /// The built-in enterprise readiness assessment.
    pub fn standard() -> Self {
        Self {
            dimensions: &DIMENSIONS,
            stages: &STAGES,
            patterns: &PATTERNS,
        }
    }

    /// Assemble and validate custom content tables.
    pub fn new(
        dimensions: &'static [Dimension],
        stages: &'static [Stage],
        patterns: &'static [PatternRule],
    ) -> Result<Self, Vec<ContentViolation>> {
        let content = Self {
            dimensions,
            stages,
            patterns,
        };
        let violations = content.validate();
        if violations.is_empty() {
            Ok(content)
        } else {
            Err(violations)
        }
    }

    pub fn dimensions(&self) -> &'static [Dimension] {
        self.dimensions
    }

    pub fn stages(&self) -> &'static [Stage] {
        self.stages
    }

    pub fn patterns(&self) -> &'static [PatternRule] {
        self.patterns
    }

    pub fn question_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.questions.len()).sum()
    }

    pub fn max_dimension_score(&self) -> u32 {
        MAX_DIMENSION_SCORE
    }

    pub fn max_total(&self) -> u32 {
        self.dimensions.len() as u32 * MAX_DIMENSION_SCORE
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dimensions.iter().flat_map(|d| d.question_ids())
    }

    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.dimensions
            .iter()
            .flat_map(|d| d.questions.iter())
            .find(|q| q.id == id)
    }

    /// Stage for a total score.
    pub fn stage_for(&self, total: u32) -> &'static Stage {
        match crate::stages::classify_stage(total, self.stages) {
            Some(stage) => stage,
            // Only constructors that validate (or the built-in tables) create a Content.
            None => unreachable!("content always carries at least one stage"),
        }
    }

    /// Check every structural invariant, collecting all violations.
    pub fn validate(&self) -> Vec<ContentViolation> {
        let mut violations = Vec::new();
        self.validate_dimensions(&mut violations);
        self.validate_questions(&mut violations);
        self.validate_stages(&mut violations);
        violations
    }

    fn validate_dimensions(&self, violations: &mut Vec<ContentViolation>) {
        if self.dimensions.len() != DimensionId::ALL.len() {
            violations.push(ContentViolation::DimensionCount {
                expected: DimensionId::ALL.len(),
                found: self.dimensions.len(),
            });
        }
        let mut seen = HashSet::new();
        for dimension in self.dimensions {
            if !seen.insert(dimension.id) {
                violations.push(ContentViolation::DuplicateDimension(dimension.id));
            }
        }
    }

    fn validate_questions(&self, violations: &mut Vec<ContentViolation>) {
        let mut seen = HashSet::new();
        for question in self.dimensions.iter().flat_map(|d| d.questions.iter()) {
            if !seen.insert(question.id) {
                violations.push(ContentViolation::DuplicateQuestion(question.id));
            }
            let mut scores: Vec<u8> = question.options.iter().map(|o| o.score).collect();
            scores.sort_unstable();
            if scores != [0, 1, 2, 3] {
                violations.push(ContentViolation::OptionScores {
                    question: question.id,
                    found: scores,
                });
            }
        }
    }

    fn validate_stages(&self, violations: &mut Vec<ContentViolation>) {
        if self.stages.is_empty() {
            violations.push(ContentViolation::NoStages);
            return;
        }

        let mut next = 0;
        for stage in self.stages {
            if stage.low > stage.high {
                violations.push(ContentViolation::InvertedStage {
                    stage: stage.id,
                    low: stage.low,
                    high: stage.high,
                });
            }
            if stage.low != next {
                violations.push(ContentViolation::StagePartition { at: stage.low });
            }
            next = stage.high + 1;
        }

        let last = self.stages[self.stages.len() - 1].high;
        if last != self.max_total() {
            violations.push(ContentViolation::StageCoverage {
                expected: self.max_total(),
                found: last,
            });
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_content_is_valid() {
        assert_eq!(Content::standard().validate(), vec![]);
    }

    #[test]
    fn standard_content_shape() {
        let content = Content::standard();
        assert_eq!(content.dimensions().len(), 5);
        assert_eq!(content.question_count(), 25);
        assert_eq!(content.max_total(), 75);
        assert_eq!(content.stages().len(), 4);
        assert_eq!(content.patterns().len(), 5);
    }

    #[test]
    fn dimensions_follow_declared_order() {
        let ids: Vec<_> = Content::standard().dimensions().iter().map(|d| d.id).collect();
        assert_eq!(ids, DimensionId::ALL.to_vec());
    }

    #[test]
    fn question_lookup_by_id() {
        let content = Content::standard();
        let q = content.question("q13").unwrap();
        assert_eq!(q.title, "Multi-Tenant Data Isolation");
        assert_eq!(q.option(2).unwrap().score, 2);
        assert!(content.question("q26").is_none());
    }

    #[test]
    fn dimension_id_serializes_lowercase() {
        let json = serde_json::to_string(&DimensionId::Livecall).unwrap();
        assert_eq!(json, "\"livecall\"");
    }

    static GAPPED_STAGES: [Stage; 2] = [
        Stage {
            id: "low",
            name: "Low",
            low: 0,
            high: 30,
            description: "",
            typical_profile: "",
            focus: &[],
            defer: &[],
        },
        Stage {
            id: "high",
            name: "High",
            low: 32,
            high: 70,
            description: "",
            typical_profile: "",
            focus: &[],
            defer: &[],
        },
    ];

    #[test]
    fn gapped_stages_are_rejected() {
        let err = Content::new(&DIMENSIONS, &GAPPED_STAGES, &PATTERNS).unwrap_err();
        assert_eq!(
            err,
            vec![
                ContentViolation::StagePartition { at: 32 },
                ContentViolation::StageCoverage {
                    expected: 75,
                    found: 70
                },
            ]
        );
    }

    #[test]
    fn missing_stages_are_rejected() {
        let err = Content::new(&DIMENSIONS, &[], &PATTERNS).unwrap_err();
        assert_eq!(err, vec![ContentViolation::NoStages]);
    }

    const fn option(score: u8) -> AnswerOption {
        AnswerOption {
            score,
            label: "",
            description: "",
        }
    }

    const fn question_with(id: &'static str, options: [AnswerOption; 4]) -> Question {
        Question {
            id,
            title: "",
            why_it_matters: "",
            options,
        }
    }

    const fn question(id: &'static str) -> Question {
        question_with(id, [option(0), option(1), option(2), option(3)])
    }

    const fn dimension(id: DimensionId, questions: [Question; 5]) -> Dimension {
        Dimension {
            id,
            name: "",
            intro: "",
            questions,
        }
    }

    const fn stage(id: &'static str, low: u32, high: u32) -> Stage {
        Stage {
            id,
            name: "",
            low,
            high,
            description: "",
            typical_profile: "",
            focus: &[],
            defer: &[],
        }
    }

    const fn questions(ids: [&'static str; 5]) -> [Question; 5] {
        [
            question(ids[0]),
            question(ids[1]),
            question(ids[2]),
            question(ids[3]),
            question(ids[4]),
        ]
    }

    static FOUR_DIMENSIONS: [Dimension; 4] = [
        dimension(DimensionId::Compliance, questions(["a1", "a2", "a3", "a4", "a5"])),
        dimension(DimensionId::Pentest, questions(["b1", "b2", "b3", "b4", "b5"])),
        dimension(DimensionId::Architecture, questions(["c1", "c2", "c3", "c4", "c5"])),
        dimension(DimensionId::Operations, questions(["d1", "d2", "d3", "d4", "d5"])),
    ];

    static SIXTY_POINT_STAGES: [Stage; 2] = [stage("early", 0, 29), stage("late", 30, 60)];

    static REPEATED_QUESTION: [Dimension; 5] = [
        dimension(DimensionId::Compliance, questions(["q1", "a2", "a3", "a4", "a5"])),
        dimension(DimensionId::Pentest, questions(["b1", "q1", "b3", "b4", "b5"])),
        dimension(DimensionId::Architecture, questions(["c1", "c2", "c3", "c4", "c5"])),
        dimension(DimensionId::Operations, questions(["d1", "d2", "d3", "d4", "d5"])),
        dimension(DimensionId::Livecall, questions(["e1", "e2", "e3", "e4", "e5"])),
    ];

    static REPEATED_DIMENSION: [Dimension; 5] = [
        dimension(DimensionId::Compliance, questions(["a1", "a2", "a3", "a4", "a5"])),
        dimension(DimensionId::Pentest, questions(["b1", "b2", "b3", "b4", "b5"])),
        dimension(DimensionId::Compliance, questions(["c1", "c2", "c3", "c4", "c5"])),
        dimension(DimensionId::Operations, questions(["d1", "d2", "d3", "d4", "d5"])),
        dimension(DimensionId::Livecall, questions(["e1", "e2", "e3", "e4", "e5"])),
    ];

    static REPEATED_OPTION_SCORE: [Dimension; 5] = [
        dimension(
            DimensionId::Compliance,
            [
                question("a1"),
                question_with("a2", [option(0), option(1), option(1), option(3)]),
                question("a3"),
                question("a4"),
                question("a5"),
            ],
        ),
        dimension(DimensionId::Pentest, questions(["b1", "b2", "b3", "b4", "b5"])),
        dimension(DimensionId::Architecture, questions(["c1", "c2", "c3", "c4", "c5"])),
        dimension(DimensionId::Operations, questions(["d1", "d2", "d3", "d4", "d5"])),
        dimension(DimensionId::Livecall, questions(["e1", "e2", "e3", "e4", "e5"])),
    ];

    static INVERTED_STAGES: [Stage; 3] =
        [stage("a", 0, 40), stage("b", 50, 45), stage("c", 46, 75)];

    static TWO_STAGES: [Stage; 2] = [stage("early", 0, 40), stage("late", 41, 75)];

    #[test]
    fn wrong_dimension_count_is_rejected() {
        let err = Content::new(&FOUR_DIMENSIONS, &SIXTY_POINT_STAGES, &[]).unwrap_err();
        assert_eq!(
            err,
            vec![ContentViolation::DimensionCount {
                expected: 5,
                found: 4
            }]
        );
    }

    #[test]
    fn stage_coverage_follows_dimension_count() {
        // Four dimensions top out at 60, so the standard 0..=75 stages overshoot.
        let err = Content::new(&FOUR_DIMENSIONS, &STAGES, &[]).unwrap_err();
        assert_eq!(
            err,
            vec![
                ContentViolation::DimensionCount {
                    expected: 5,
                    found: 4
                },
                ContentViolation::StageCoverage {
                    expected: 60,
                    found: 75
                },
            ]
        );
    }

    #[test]
    fn repeated_question_id_is_rejected() {
        let err = Content::new(&REPEATED_QUESTION, &STAGES, &[]).unwrap_err();
        assert_eq!(err, vec![ContentViolation::DuplicateQuestion("q1")]);
    }

    #[test]
    fn repeated_dimension_is_rejected() {
        let err = Content::new(&REPEATED_DIMENSION, &STAGES, &[]).unwrap_err();
        assert_eq!(
            err,
            vec![ContentViolation::DuplicateDimension(DimensionId::Compliance)]
        );
    }

    #[test]
    fn option_scores_must_be_zero_through_three() {
        let err = Content::new(&REPEATED_OPTION_SCORE, &STAGES, &[]).unwrap_err();
        assert_eq!(
            err,
            vec![ContentViolation::OptionScores {
                question: "a2",
                found: vec![0, 1, 1, 3]
            }]
        );
    }

    #[test]
    fn inverted_stage_is_rejected() {
        let err = Content::new(&DIMENSIONS, &INVERTED_STAGES, &PATTERNS).unwrap_err();
        assert_eq!(
            err,
            vec![
                ContentViolation::InvertedStage {
                    stage: "b",
                    low: 50,
                    high: 45
                },
                ContentViolation::StagePartition { at: 50 },
            ]
        );
    }

    #[test]
    fn stage_for_reads_custom_stages() {
        let content = Content::new(&DIMENSIONS, &TWO_STAGES, &PATTERNS).unwrap();
        assert_eq!(content.stage_for(0).id, "early");
        assert_eq!(content.stage_for(40).id, "early");
        assert_eq!(content.stage_for(41).id, "late");
        assert_eq!(content.stage_for(75).id, "late");
        assert_eq!(content.stage_for(500).id, "late");
        assert_eq!(Content::standard().stage_for(75).id, "enterprise-ready");
    }

    #[test]
    fn valid_custom_tables_are_accepted() {
        let content = Content::new(&DIMENSIONS, &TWO_STAGES, &[]).unwrap();
        assert_eq!(content.stages().len(), 2);
        assert!(content.patterns().is_empty());
    }

    #[test]
    fn focus_item_accessors() {
        let link = FocusItem::Link {
            text: "Read more",
            url: "https://example.com",
        };
        assert_eq!(link.text(), "Read more");
        assert_eq!(link.url(), Some("https://example.com"));
        assert_eq!(FocusItem::Text("plain").url(), None);
    }
}
