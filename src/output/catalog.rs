//! The question catalog: every dimension, question and answer option.

use super::OutputFormat;
use crate::content::{Content, Dimension, Stage};
use crate::formatting::FormattingConfig;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CatalogDocument<'a> {
    version: &'static str,
    question_count: usize,
    max_score: u32,
    dimensions: &'a [Dimension],
    stages: &'a [Stage],
}

pub fn write_catalog<W: Write>(
    mut writer: W,
    content: &Content,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let document = CatalogDocument {
                version: env!("CARGO_PKG_VERSION"),
                question_count: content.question_count(),
                max_score: content.max_total(),
                dimensions: content.dimensions(),
                stages: content.stages(),
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
        OutputFormat::Markdown => write_markdown(&mut writer, content)?,
        OutputFormat::Terminal => write_terminal(&mut writer, content, formatting)?,
    }
    Ok(())
}

fn write_markdown<W: Write>(writer: &mut W, content: &Content) -> Result<()> {
    writeln!(writer, "# Enterprise Security Readiness Questions")?;
    writeln!(writer)?;
    for (index, dimension) in content.dimensions().iter().enumerate() {
        writeln!(writer, "## {}. {}", index + 1, dimension.name)?;
        writeln!(writer)?;
        writeln!(writer, "{}", dimension.intro)?;
        writeln!(writer)?;
        for question in &dimension.questions {
            writeln!(writer, "### {} ({})", question.title, question.id)?;
            writeln!(writer)?;
            writeln!(writer, "*Why it matters:* {}", question.why_it_matters)?;
            writeln!(writer)?;
            for option in &question.options {
                writeln!(
                    writer,
                    "- **{}. {}** {}",
                    option.score, option.label, option.description
                )?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_terminal<W: Write>(writer: &mut W, content: &Content, f: FormattingConfig) -> Result<()> {
    for (index, dimension) in content.dimensions().iter().enumerate() {
        writeln!(
            writer,
            "{}",
            f.header(&format!("Dimension {} of {}: {}", index + 1, content.dimensions().len(), dimension.name))
        )?;
        for question in &dimension.questions {
            writeln!(writer, "  {} {}", f.dim(question.id), f.bold(question.title))?;
            for option in &question.options {
                writeln!(writer, "    [{}] {}", option.score, option.label)?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_catalog(&mut buffer, &Content::standard(), format, FormattingConfig::plain()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn json_catalog_lists_all_questions() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["question_count"], 25);
        assert_eq!(value["max_score"], 75);
        assert_eq!(value["dimensions"].as_array().unwrap().len(), 5);
        assert_eq!(value["dimensions"][0]["id"], "compliance");
        assert_eq!(value["dimensions"][0]["questions"][0]["options"][3]["score"], 3);
        assert_eq!(value["stages"][3]["id"], "enterprise-ready");
    }

    #[test]
    fn terminal_catalog_numbers_dimensions() {
        let text = render(OutputFormat::Terminal);
        assert!(text.contains("Dimension 1 of 5: Compliance Artifacts"));
        assert!(text.contains("Dimension 5 of 5: Live Call Readiness"));
        assert!(text.contains("[0] No SOC 2 report"));
    }

    #[test]
    fn markdown_catalog_has_question_headings() {
        let text = render(OutputFormat::Markdown);
        assert!(text.contains("### SOC 2 Report Scope and Currency (q1)"));
        assert!(text.contains("*Why it matters:*"));
    }
}
