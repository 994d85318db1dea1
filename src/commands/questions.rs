use super::AppContext;
use crate::content::Content;
use crate::output::{write_catalog, OutputFormat};
use anyhow::Result;

pub fn handle_questions(format: Option<OutputFormat>, app: &AppContext) -> Result<()> {
    let format = format.unwrap_or(app.config.output.default_format);
    let stdout = std::io::stdout();
    write_catalog(stdout.lock(), &Content::standard(), format, app.formatting)
}
