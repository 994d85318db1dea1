//! Renderers for assessment results and the question catalog.

pub mod catalog;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::formatting::FormattingConfig;
use crate::report::AssessmentResults;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use catalog::write_catalog;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal summary
    #[default]
    Terminal,
    /// Markdown report
    Markdown,
    /// Machine-readable JSON
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AssessmentResults, share_link: Option<&str>) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Render results to a string, e.g. for writing to a file.
pub fn render_results(
    results: &AssessmentResults,
    share_link: Option<&str>,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer, formatting).write_results(results, share_link)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write results to `output` (creating parent directories) or stdout.
pub fn output_results(
    results: &AssessmentResults,
    share_link: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> Result<()> {
    match output {
        Some(path) => {
            // Files never carry terminal escapes.
            let formatting = FormattingConfig {
                color: crate::formatting::ColorMode::Never,
                ..formatting
            };
            let content = render_results(results, share_link, format, formatting)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            create_writer(format, stdout.lock(), formatting).write_results(results, share_link)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::content::Content;
    use tempfile::TempDir;

    #[test]
    fn output_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("report.md");
        let content = Content::standard();
        let results = AssessmentResults::compute(&content, &AnswerSet::filled(&content, 2));

        output_results(
            &results,
            None,
            OutputFormat::Markdown,
            Some(&nested),
            FormattingConfig::plain(),
        )
        .unwrap();

        let written = fs::read_to_string(nested).unwrap();
        assert!(written.contains("Growth Enterprise"));
    }
}
