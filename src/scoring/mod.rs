//! Scoring engine: answer set to per-dimension and total scores.
//!
//! Missing answers contribute nothing, so partial and empty answer sets simply
//! under-score. There are no error conditions.

use crate::answers::AnswerSet;
use crate::content::{Content, DimensionId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Score per dimension, each in `[0, 15]` for the standard content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionScores {
    pub compliance: u32,
    pub pentest: u32,
    pub architecture: u32,
    pub operations: u32,
    pub livecall: u32,
}

impl DimensionScores {
    pub fn get(&self, id: DimensionId) -> u32 {
        match id {
            DimensionId::Compliance => self.compliance,
            DimensionId::Pentest => self.pentest,
            DimensionId::Architecture => self.architecture,
            DimensionId::Operations => self.operations,
            DimensionId::Livecall => self.livecall,
        }
    }

    pub fn set(&mut self, id: DimensionId, value: u32) {
        let slot = match id {
            DimensionId::Compliance => &mut self.compliance,
            DimensionId::Pentest => &mut self.pentest,
            DimensionId::Architecture => &mut self.architecture,
            DimensionId::Operations => &mut self.operations,
            DimensionId::Livecall => &mut self.livecall,
        };
        *slot = value;
    }

    /// Scores in dimension declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionId, u32)> + '_ {
        DimensionId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    pub fn sum(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }
}

impl Serialize for DimensionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DimensionId::ALL.len()))?;
        for (id, value) in self.iter() {
            map.serialize_entry(id.as_str(), &value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub dimension_scores: DimensionScores,
    pub total_score: u32,
}

/// Sum the chosen option scores per dimension and overall.
pub fn calculate_results(content: &Content, answers: &AnswerSet) -> ScoreCard {
    let mut dimension_scores = DimensionScores::default();

    for dimension in content.dimensions() {
        let score: u32 = dimension
            .question_ids()
            .filter_map(|id| answers.get(id))
            .map(u32::from)
            .sum();
        dimension_scores.set(dimension.id, score);
    }

    ScoreCard {
        total_score: dimension_scores.sum(),
        dimension_scores,
    }
}
