use super::OutputWriter;
use crate::content::FocusItem;
use crate::report::AssessmentResults;
use anyhow::Result;
use chrono::Utc;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AssessmentResults, share_link: Option<&str>) -> Result<()> {
        self.write_header(results)?;
        self.write_stage(results)?;
        self.write_dimensions(results)?;
        self.write_patterns(results)?;
        self.write_focus(results)?;
        if let Some(link) = share_link {
            writeln!(self.writer, "## Share")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "<{link}>")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &AssessmentResults) -> Result<()> {
        writeln!(self.writer, "# Enterprise Security Readiness Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Readiness score:** {} / {}",
            results.total_score, results.max_score
        )?;
        if !results.is_complete() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "> Only {} of {} questions answered; unanswered questions score 0.",
                results.answered, results.question_count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stage(&mut self, results: &AssessmentResults) -> Result<()> {
        let stage = results.stage;
        writeln!(
            self.writer,
            "## Stage: {} ({}-{})",
            stage.name, stage.low, stage.high
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", stage.description)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*Typical profile:* {}", stage.typical_profile)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dimensions(&mut self, results: &AssessmentResults) -> Result<()> {
        writeln!(self.writer, "## Score by Dimension")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Dimension | Score |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        for dimension in &results.dimensions {
            writeln!(
                self.writer,
                "| {} | {}/{} |",
                dimension.name, dimension.score, dimension.max_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_patterns(&mut self, results: &AssessmentResults) -> Result<()> {
        if results.patterns.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Pattern Analysis")?;
        writeln!(self.writer)?;
        for pattern in &results.patterns {
            writeln!(self.writer, "### {}", pattern.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", pattern.description)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_focus(&mut self, results: &AssessmentResults) -> Result<()> {
        let stage = results.stage;
        if !stage.focus.is_empty() {
            writeln!(self.writer, "## What to Focus On")?;
            writeln!(self.writer)?;
            for item in stage.focus {
                match item {
                    FocusItem::Text(text) => writeln!(self.writer, "- {text}")?,
                    FocusItem::Link { text, url } => writeln!(self.writer, "- [{text}]({url})")?,
                }
            }
            writeln!(self.writer)?;
        }
        if !stage.defer.is_empty() {
            writeln!(self.writer, "## What to Defer")?;
            writeln!(self.writer)?;
            for item in stage.defer {
                writeln!(self.writer, "- {item}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
