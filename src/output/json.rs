use super::OutputWriter;
use crate::report::AssessmentResults;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    version: &'static str,
    #[serde(flatten)]
    results: &'a AssessmentResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_link: Option<&'a str>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AssessmentResults, share_link: Option<&str>) -> Result<()> {
        let report = JsonReport {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            results,
            share_link,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
