//! Stage classification: total score to readiness tier.
use crate::content::Stage;

/// Return the first stage whose inclusive range contains `total`.
///
/// Stages are checked in declaration (ascending) order. If no range matches,
/// the last declared stage is returned so an off-by-one in the table still
/// yields a result. `None` only for an empty table.
pub fn classify_stage(total: u32, stages: &[Stage]) -> Option<&Stage> {
    stages
        .iter()
        .find(|stage| stage.contains(total))
        .or_else(|| stages.last())
}
