//! Handlers behind each CLI subcommand.

pub mod check_email;
pub mod codec;
pub mod init;
pub mod questions;
pub mod run;
pub mod score;

use crate::answers::AnswerSet;
use crate::config::ReadinessConfig;
use crate::content::Content;
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub use check_email::handle_check_email;
pub use codec::{handle_decode, handle_encode};
pub use init::init_config;
pub use questions::handle_questions;
pub use run::{handle_run, RunArgs};
pub use score::{handle_score, ScoreArgs};

/// Settings resolved once at startup and shared by every handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ReadinessConfig,
    pub formatting: FormattingConfig,
}

/// Read an answers JSON file, or stdin for `-`. Unknown question ids are dropped.
pub fn read_answers_file(path: &Path, content: &Content) -> Result<AnswerSet> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read answers from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file {}", path.display()))?
    };

    let mut answers = crate::codec::text::from_text(&text)
        .with_context(|| format!("Invalid answers in {}", path.display()))?;
    let dropped = answers.retain_known(content);
    if dropped > 0 {
        tracing::warn!(dropped, "ignored answers for unknown questions");
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn answers_file_drops_unknown_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        std::fs::write(&path, r#"{"q1": 3, "q99": 2}"#).unwrap();

        let answers = read_answers_file(&path, &Content::standard()).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("q1"), Some(3));
    }

    #[test]
    fn out_of_range_score_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        std::fs::write(&path, r#"{"q1": 4}"#).unwrap();

        assert!(read_answers_file(&path, &Content::standard()).is_err());
    }
}
