use super::{read_answers_file, AppContext};
use crate::answers::AnswerSet;
use crate::codec::{answers_token, decode, share_link};
use crate::content::Content;
use crate::output::{output_results, OutputFormat};
use crate::report::AssessmentResults;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ScoreArgs {
    pub link: Option<String>,
    pub answers: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_score(args: ScoreArgs, app: &AppContext) -> Result<()> {
    let content = Content::standard();
    let answers = match (&args.link, &args.answers) {
        (Some(link), _) => answers_from_link(link, &content),
        (None, Some(path)) => read_answers_file(path, &content)?,
        (None, None) => anyhow::bail!("Provide answers with --link or --answers."),
    };

    if !answers.is_complete(&content) {
        tracing::warn!(
            answered = answers.answered_in(&content),
            total = content.question_count(),
            "answer set is incomplete; unanswered questions score 0"
        );
    }

    let results = AssessmentResults::compute(&content, &answers);
    let link = (!answers.is_empty()).then(|| share_link(&app.config.share.base_url, &answers));
    let format = args.format.unwrap_or(app.config.output.default_format);

    output_results(
        &results,
        link.as_deref(),
        format,
        args.output.as_deref(),
        app.formatting,
    )
}

/// Answers carried by a link; anything undecodable is an empty set.
fn answers_from_link(link: &str, content: &Content) -> AnswerSet {
    let mut answers = answers_token(link).and_then(decode).unwrap_or_else(|| {
        tracing::warn!("link carries no decodable answers; scoring an empty set");
        AnswerSet::new()
    });
    let dropped = answers.retain_known(content);
    if dropped > 0 {
        tracing::warn!(dropped, "ignored answers for unknown questions in link");
    }
    answers
}
