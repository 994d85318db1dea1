use super::OutputWriter;
use crate::formatting::FormattingConfig;
use crate::report::AssessmentResults;
use anyhow::Result;
use std::io::Write;

const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 30;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AssessmentResults, share_link: Option<&str>) -> Result<()> {
        self.write_score(results)?;
        self.write_dimensions(results)?;
        self.write_patterns(results)?;
        self.write_focus(results)?;
        if let Some(link) = share_link {
            writeln!(self.writer, "{}", self.formatting.header("Share your results"))?;
            writeln!(self.writer, "  {link}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_score(&mut self, results: &AssessmentResults) -> Result<()> {
        let f = self.formatting;
        let stage = results.stage;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", f.header("YOUR READINESS SCORE"))?;
        writeln!(
            self.writer,
            "  {} / {}   {}",
            f.bold(&results.total_score.to_string()),
            results.max_score,
            f.stage(stage.id, stage.name)
        )?;
        if !results.is_complete() {
            writeln!(
                self.writer,
                "  {}",
                f.warning(&format!(
                    "{} of {} questions answered",
                    results.answered, results.question_count
                ))
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", stage.description)?;
        writeln!(self.writer, "{} {}", f.dim("Typical profile:"), stage.typical_profile)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dimensions(&mut self, results: &AssessmentResults) -> Result<()> {
        let f = self.formatting;
        writeln!(self.writer, "{}", f.header("Score by Dimension"))?;
        for dimension in &results.dimensions {
            writeln!(
                self.writer,
                "  {:<width$} {} {:>2}/{}",
                dimension.name,
                f.bar(dimension.score, dimension.max_score, BAR_WIDTH),
                dimension.score,
                dimension.max_score,
                width = NAME_WIDTH
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_patterns(&mut self, results: &AssessmentResults) -> Result<()> {
        if results.patterns.is_empty() {
            return Ok(());
        }
        let f = self.formatting;
        writeln!(self.writer, "{}", f.header("Pattern Analysis"))?;
        for pattern in &results.patterns {
            writeln!(self.writer, "  {}", f.bold(pattern.name))?;
            writeln!(self.writer, "    {}", pattern.description)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_focus(&mut self, results: &AssessmentResults) -> Result<()> {
        let f = self.formatting;
        let stage = results.stage;
        if !stage.focus.is_empty() {
            writeln!(self.writer, "{}", f.header("What to Focus On"))?;
            for item in stage.focus {
                writeln!(self.writer, "  {} {}", f.success(f.bullet()), item.text())?;
                if let Some(url) = item.url() {
                    writeln!(self.writer, "    {}", f.dim(url))?;
                }
            }
            writeln!(self.writer)?;
        }
        if !stage.defer.is_empty() {
            writeln!(self.writer, "{}", f.header("What to Defer"))?;
            for item in stage.defer {
                writeln!(self.writer, "  {} {}", f.dim(f.bullet()), item)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::content::Content;

    #[test]
    fn plain_terminal_summary() {
        let content = Content::standard();
        let mut answers = AnswerSet::filled(&content, 3);
        // compliance 12 (3,3,3,2,1), architecture 4
        answers.insert("q4", 2).unwrap();
        answers.insert("q5", 1).unwrap();
        for (id, score) in [("q11", 1), ("q12", 1), ("q13", 1), ("q14", 1), ("q15", 0)] {
            answers.insert(id, score).unwrap();
        }
        let results = AssessmentResults::compute(&content, &answers);

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_results(&results, Some("https://x.test/#answers=abc"))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("61 / 75   Enterprise-Ready"));
        assert!(text.contains("High Compliance, Low Architecture"));
        assert!(!text.contains("High Architecture, Low Compliance"));
        assert!(text.contains("  https://x.test/#answers=abc"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn dimension_bars_scale_to_each_summary() {
        let content = Content::standard();
        let mut results = AssessmentResults::compute(&content, &AnswerSet::filled(&content, 1));
        results.dimensions[2].name = "Platform";
        results.dimensions[2].score = 10;
        results.dimensions[2].max_score = 10;

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_results(&results, None)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains(&format!("  {:<30} {} 10/10", "Platform", "#".repeat(20))));
        assert!(text.contains(&format!(
            "  {:<30} {}{}  5/15",
            "Compliance Artifacts",
            "#".repeat(7),
            ".".repeat(13)
        )));
        assert!(!text.contains("Architecture Maturity"));
    }
}
