//! Line-oriented front end for an assessment session.
//!
//! Drives a [`Flow`] from any `BufRead`/`Write` pair so the same code serves a
//! terminal and scripted tests. End of input always quits cleanly.

use crate::codec::share_link;
use crate::contact::ContactPolicy;
use crate::content::Question;
use crate::formatting::FormattingConfig;
use crate::output::{OutputWriter, TerminalWriter};
use crate::session::{Advance, Flow, FlowError, Page, SessionContext, SessionStore};
use crate::submission::Submitter;
use anyhow::Result;
use std::io::{BufRead, Write};

const CONSENT_TEXT: &str = "By providing your email, you consent to Adversis contacting you about your assessment results and our services. We will never sell or share your email with third parties.";

pub struct InteractiveOptions<'a> {
    pub submitter: &'a dyn Submitter,
    pub policy: &'a ContactPolicy,
    pub share_base_url: &'a str,
    pub formatting: FormattingConfig,
}

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub page: Page,
    pub share_link: Option<String>,
}

enum Step {
    Continue,
    Quit,
}

enum Choice {
    Answered,
    Back,
    Quit,
}

pub fn run_interactive<S, R, W>(
    flow: &mut Flow,
    ctx: &mut SessionContext<S>,
    input: R,
    output: W,
    options: &InteractiveOptions<'_>,
) -> Result<SessionOutcome>
where
    S: SessionStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        input,
        output,
        options,
    };

    loop {
        let step = match flow.page() {
            Page::Gate => session.gate(flow, ctx)?,
            Page::Assessment => session.assessment(flow)?,
            Page::Results => session.results(flow, ctx)?,
        };
        if let Step::Quit = step {
            break;
        }
    }

    let outcome = SessionOutcome {
        page: flow.page(),
        share_link: (!flow.answers().is_empty())
            .then(|| share_link(options.share_base_url, flow.answers())),
    };
    if let Some(link) = &outcome.share_link {
        writeln!(session.output, "Resume or share with: {link}")?;
    }
    Ok(outcome)
}

/// Per-dimension completion, e.g. `compliance 5/5 | pentest 2/5 | ...`.
fn progress_line(flow: &Flow, f: &FormattingConfig) -> String {
    let current = flow.current_dimension().id;
    flow.progress()
        .into_iter()
        .zip(flow.content().dimensions())
        .map(|((id, answered), dimension)| {
            let cell = format!("{id} {answered}/{}", dimension.questions.len());
            if answered == dimension.questions.len() {
                f.success(&cell)
            } else if id == current {
                f.bold(&cell)
            } else {
                f.dim(&cell)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

struct Session<'o, 'a, R, W> {
    input: R,
    output: W,
    options: &'o InteractiveOptions<'a>,
}

impl<R: BufRead, W: Write> Session<'_, '_, R, W> {
    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn gate<S: SessionStore>(&mut self, flow: &mut Flow, ctx: &mut SessionContext<S>) -> Result<Step> {
        let f = self.options.formatting;
        writeln!(self.output)?;
        writeln!(self.output, "{}", f.header("Enterprise Security Readiness Assessment"))?;
        writeln!(
            self.output,
            "Score your program across the 5 dimensions enterprise buyers evaluate. 25 questions, 5-10 minutes."
        )?;
        writeln!(self.output)?;

        loop {
            let Some(email) = self.prompt("Work email: ")? else {
                return Ok(Step::Quit);
            };
            writeln!(self.output, "{}", f.dim(CONSENT_TEXT))?;
            let Some(answer) = self.prompt("I agree [y/N]: ")? else {
                return Ok(Step::Quit);
            };
            let consent = matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes");

            match flow.submit_gate(ctx, self.options.submitter, self.options.policy, &email, consent) {
                Ok(_) => return Ok(Step::Continue),
                Err(e @ (FlowError::Contact(_) | FlowError::ConsentRequired)) => {
                    writeln!(self.output, "{}", f.error(&e.to_string()))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn assessment(&mut self, flow: &mut Flow) -> Result<Step> {
        let f = self.options.formatting;
        let mut resume_at_end = false;

        loop {
            let dimension = flow.current_dimension();
            let total = flow.content().dimensions().len();
            writeln!(self.output)?;
            writeln!(
                self.output,
                "{}",
                f.header(&format!(
                    "Dimension {} of {}: {}",
                    flow.dimension_index() + 1,
                    total,
                    dimension.name
                ))
            )?;
            writeln!(self.output, "{}", progress_line(flow, &f))?;
            writeln!(self.output, "{}", dimension.intro)?;

            let count = dimension.questions.len();
            let mut index = if resume_at_end {
                count - 1
            } else {
                dimension
                    .questions
                    .iter()
                    .position(|q| !flow.answers().contains(q.id))
                    .unwrap_or(0)
            };
            resume_at_end = false;

            let mut moved_back = false;
            while index < count {
                let question = &dimension.questions[index];
                self.show_question(flow, index, count, question)?;
                match self.ask_option(flow, question)? {
                    Choice::Answered => index += 1,
                    Choice::Back if index > 0 => index -= 1,
                    Choice::Back => {
                        if flow.previous_dimension()? {
                            moved_back = true;
                            break;
                        }
                        writeln!(self.output, "{}", f.dim("Already at the first question."))?;
                    }
                    Choice::Quit => return Ok(Step::Quit),
                }
            }
            if moved_back {
                resume_at_end = true;
                continue;
            }

            match flow.next_dimension() {
                Ok(Advance::Dimension(_)) => {}
                Ok(Advance::Results) => return Ok(Step::Continue),
                Err(e @ FlowError::DimensionIncomplete { .. }) => {
                    writeln!(self.output, "{}", f.warning(&e.to_string()))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_question(
        &mut self,
        flow: &Flow,
        index: usize,
        count: usize,
        question: &Question,
    ) -> Result<()> {
        let f = self.options.formatting;
        let current = flow.answers().get(question.id);
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} {}",
            f.dim(&format!("[{}/{}]", index + 1, count)),
            f.bold(question.title)
        )?;
        for option in &question.options {
            let marker = if current == Some(option.score) { "*" } else { " " };
            writeln!(self.output, " {marker}[{}] {}", option.score, option.label)?;
            writeln!(self.output, "      {}", f.dim(option.description))?;
        }
        Ok(())
    }

    fn ask_option(&mut self, flow: &mut Flow, question: &Question) -> Result<Choice> {
        let f = self.options.formatting;
        let current = flow.answers().get(question.id);
        let prompt = if current.is_some() {
            "Answer 0-3, Enter to keep (? why it matters, b back, q quit): "
        } else {
            "Answer 0-3 (? why it matters, b back, q quit): "
        };

        loop {
            let Some(input) = self.prompt(prompt)? else {
                return Ok(Choice::Quit);
            };
            match input.to_ascii_lowercase().as_str() {
                "" if current.is_some() => return Ok(Choice::Answered),
                "?" => writeln!(self.output, "{}", f.dim(question.why_it_matters))?,
                "b" => return Ok(Choice::Back),
                "q" => return Ok(Choice::Quit),
                other => match other.parse::<u8>() {
                    Ok(score) => match flow.select(question.id, score) {
                        Ok(()) => return Ok(Choice::Answered),
                        Err(e) => writeln!(self.output, "{}", f.error(&e.to_string()))?,
                    },
                    Err(_) => writeln!(self.output, "{}", f.error("Enter a number from 0 to 3."))?,
                },
            }
        }
    }

    fn results<S: SessionStore>(&mut self, flow: &mut Flow, ctx: &SessionContext<S>) -> Result<Step> {
        let f = self.options.formatting;
        let link = share_link(self.options.share_base_url, flow.answers());
        if let Some(results) = flow.results() {
            TerminalWriter::new(&mut self.output, f).write_results(&results, Some(&link))?;
        }

        loop {
            let menu = if flow.contact_requested() {
                "[l] show link  [r] retake  [q] quit: "
            } else {
                "[c] schedule a readiness review  [l] show link  [r] retake  [q] quit: "
            };
            let Some(choice) = self.prompt(menu)? else {
                return Ok(Step::Quit);
            };
            match choice.to_ascii_lowercase().as_str() {
                "c" => {
                    if flow.request_contact(ctx, self.options.submitter)? {
                        writeln!(self.output, "{}", f.success("Thanks, we'll be in touch."))?;
                    } else {
                        writeln!(self.output, "{}", f.dim("Review already requested."))?;
                    }
                }
                "l" => writeln!(self.output, "{link}")?,
                "r" => {
                    flow.retake()?;
                    return Ok(Step::Continue);
                }
                "q" => return Ok(Step::Quit),
                _ => writeln!(self.output, "{}", f.error("Choose c, l, r or q."))?,
            }
        }
    }
}
