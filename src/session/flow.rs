//! Page state machine: gate, assessment, results.

use super::store::{SessionContext, SessionStore};
use crate::answers::AnswerSet;
use crate::codec::{self, answers_token, format_fragment};
use crate::contact::{validate_contact, ContactError, ContactPolicy};
use crate::content::{Content, Dimension, DimensionId};
use crate::report::AssessmentResults;
use crate::submission::{
    submit_best_effort, Submission, Submitter, GATE_SOURCE, RESULTS_CONTACT_SOURCE,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Gate,
    Assessment,
    Results,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Gate => "gate",
            Page::Assessment => "assessment",
            Page::Results => "results",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("not available on the {actual} page (expected {expected})")]
    WrongPage { expected: Page, actual: Page },
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error("Please agree to the consent below to continue.")]
    ConsentRequired,
    #[error("unknown question {0:?}")]
    UnknownQuestion(String),
    #[error("question {question:?} has no option scored {score}")]
    UnknownOption { question: String, score: u8 },
    #[error("{remaining} question(s) in {dimension} still need an answer")]
    DimensionIncomplete {
        dimension: &'static str,
        remaining: usize,
    },
}

/// Where `next_dimension` moved the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Dimension(usize),
    Results,
}

/// One assessment session: current page, answers and navigation state.
#[derive(Debug, Clone)]
pub struct Flow {
    content: Content,
    page: Page,
    answers: AnswerSet,
    dimension_index: usize,
    contact_requested: bool,
}

impl Flow {
    /// Decide the starting page from the address fragment and the session gate flag.
    ///
    /// An undecodable fragment is treated as "no prior answers".
    pub fn start<S: SessionStore>(
        fragment: Option<&str>,
        ctx: &SessionContext<S>,
        content: Content,
    ) -> Self {
        let mut answers = fragment
            .and_then(answers_token)
            .and_then(|token| {
                let decoded = codec::decode(token);
                if decoded.is_none() {
                    info!("answers link could not be decoded; starting without prior answers");
                }
                decoded
            })
            .unwrap_or_default();

        let dropped = answers.retain_known(&content);
        if dropped > 0 {
            warn!(dropped, "ignored answers for unknown questions in link");
        }

        let page = match (ctx.gate_satisfied(), answers.is_complete(&content)) {
            (false, _) => Page::Gate,
            (true, true) => Page::Results,
            (true, false) => Page::Assessment,
        };
        debug!(%page, answered = answers.len(), "session started");

        let mut flow = Self {
            content,
            page,
            answers,
            dimension_index: 0,
            contact_requested: false,
        };
        flow.dimension_index = flow.first_incomplete_dimension();
        flow
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn dimension_index(&self) -> usize {
        self.dimension_index
    }

    pub fn current_dimension(&self) -> &'static Dimension {
        &self.content.dimensions()[self.dimension_index]
    }

    pub fn is_last_dimension(&self) -> bool {
        self.dimension_index + 1 == self.content.dimensions().len()
    }

    pub fn contact_requested(&self) -> bool {
        self.contact_requested
    }

    /// Answered question count per dimension.
    pub fn progress(&self) -> Vec<(DimensionId, usize)> {
        self.content
            .dimensions()
            .iter()
            .map(|d| (d.id, self.answered_in(d)))
            .collect()
    }

    /// `#answers=<token>` for the current answers, `None` while empty.
    pub fn fragment(&self) -> Option<String> {
        (!self.answers.is_empty()).then(|| format_fragment(&codec::encode(&self.answers)))
    }

    pub fn results(&self) -> Option<AssessmentResults> {
        (self.page == Page::Results).then(|| AssessmentResults::compute(&self.content, &self.answers))
    }

    /// Validate the contact, submit it best effort, and open the gate.
    pub fn submit_gate<S: SessionStore>(
        &mut self,
        ctx: &mut SessionContext<S>,
        submitter: &dyn Submitter,
        policy: &ContactPolicy,
        email: &str,
        consent: bool,
    ) -> Result<Page, FlowError> {
        self.expect_page(Page::Gate)?;
        let address = validate_contact(email, policy)?;
        if !consent {
            return Err(FlowError::ConsentRequired);
        }

        submit_best_effort(
            submitter,
            &Submission::Gate {
                email: address.to_string(),
                source: GATE_SOURCE.to_string(),
            },
        );

        if let Err(e) = ctx.satisfy_gate(&address) {
            warn!("could not record gate in session store: {}", e);
        }

        self.page = if self.answers.is_complete(&self.content) {
            Page::Results
        } else {
            Page::Assessment
        };
        info!(page = %self.page, "gate satisfied");
        Ok(self.page)
    }

    pub fn select(&mut self, question_id: &str, score: u8) -> Result<(), FlowError> {
        self.expect_page(Page::Assessment)?;
        let question = self
            .content
            .question(question_id)
            .ok_or_else(|| FlowError::UnknownQuestion(question_id.to_string()))?;
        if question.option(score).is_none() {
            return Err(FlowError::UnknownOption {
                question: question_id.to_string(),
                score,
            });
        }

        self.answers
            .insert(question.id, score)
            .map_err(|_| FlowError::UnknownOption {
                question: question_id.to_string(),
                score,
            })
    }

    /// Move past the current dimension once all of its questions are answered.
    pub fn next_dimension(&mut self) -> Result<Advance, FlowError> {
        self.expect_page(Page::Assessment)?;
        let dimension = self.current_dimension();
        let remaining = dimension.questions.len() - self.answered_in(dimension);
        if remaining > 0 {
            return Err(FlowError::DimensionIncomplete {
                dimension: dimension.name,
                remaining,
            });
        }

        if !self.is_last_dimension() {
            self.dimension_index += 1;
            return Ok(Advance::Dimension(self.dimension_index));
        }

        // Earlier dimensions can be left incomplete when resuming a partial link.
        let earliest = self.first_incomplete_dimension();
        if !self.answers.is_complete(&self.content) {
            let dimension = &self.content.dimensions()[earliest];
            self.dimension_index = earliest;
            return Err(FlowError::DimensionIncomplete {
                dimension: dimension.name,
                remaining: dimension.questions.len() - self.answered_in(dimension),
            });
        }

        self.page = Page::Results;
        info!("assessment complete");
        Ok(Advance::Results)
    }

    /// Go back one dimension. Returns false on the first dimension.
    pub fn previous_dimension(&mut self) -> Result<bool, FlowError> {
        self.expect_page(Page::Assessment)?;
        if self.dimension_index == 0 {
            return Ok(false);
        }
        self.dimension_index -= 1;
        Ok(true)
    }

    /// Clear all answers (and with them the fragment) and start over.
    pub fn retake(&mut self) -> Result<(), FlowError> {
        self.expect_page(Page::Results)?;
        self.answers.clear();
        self.dimension_index = 0;
        self.contact_requested = false;
        self.page = Page::Assessment;
        info!("retaking assessment");
        Ok(())
    }

    /// Ask to be contacted about these results. Sent at most once per results view;
    /// returns false when it was already requested.
    pub fn request_contact<S: SessionStore>(
        &mut self,
        ctx: &SessionContext<S>,
        submitter: &dyn Submitter,
    ) -> Result<bool, FlowError> {
        self.expect_page(Page::Results)?;
        if self.contact_requested {
            return Ok(false);
        }

        let results = AssessmentResults::compute(&self.content, &self.answers);
        submit_best_effort(
            submitter,
            &Submission::ResultsContact {
                email: ctx.contact().unwrap_or_default(),
                source: RESULTS_CONTACT_SOURCE.to_string(),
                total_score: results.total_score,
                stage: results.stage.name.to_string(),
            },
        );
        self.contact_requested = true;
        Ok(true)
    }

    fn expect_page(&self, expected: Page) -> Result<(), FlowError> {
        if self.page == expected {
            Ok(())
        } else {
            Err(FlowError::WrongPage {
                expected,
                actual: self.page,
            })
        }
    }

    fn answered_in(&self, dimension: &Dimension) -> usize {
        dimension
            .question_ids()
            .filter(|id| self.answers.contains(id))
            .count()
    }

    fn first_incomplete_dimension(&self) -> usize {
        self.content
            .dimensions()
            .iter()
            .position(|d| self.answered_in(d) < d.questions.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemorySessionStore;
    use crate::submission::SubmissionError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: RefCell<Vec<Submission>>,
        fail: bool,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(submission.clone());
            if self.fail {
                Err(SubmissionError::Status(503))
            } else {
                Ok(())
            }
        }
    }

    fn gated_context() -> SessionContext<MemorySessionStore> {
        let mut ctx = SessionContext::new(MemorySessionStore::new());
        let address = validate_contact("ciso@company.com", &ContactPolicy::new()).unwrap();
        ctx.satisfy_gate(&address).unwrap();
        ctx
    }

    fn full_fragment(score: u8) -> String {
        let answers = AnswerSet::filled(&Content::standard(), score);
        format_fragment(&codec::encode(&answers))
    }

    fn answer_current_dimension(flow: &mut Flow, score: u8) {
        for id in flow.current_dimension().question_ids() {
            flow.select(id, score).unwrap();
        }
    }

    #[test]
    fn fresh_session_starts_at_gate() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let flow = Flow::start(None, &ctx, Content::standard());
        assert_eq!(flow.page(), Page::Gate);
        assert_eq!(flow.fragment(), None);
    }

    #[test]
    fn satisfied_gate_starts_at_assessment() {
        let flow = Flow::start(None, &gated_context(), Content::standard());
        assert_eq!(flow.page(), Page::Assessment);
        assert_eq!(flow.dimension_index(), 0);
    }

    #[test]
    fn complete_link_with_satisfied_gate_starts_at_results() {
        let fragment = full_fragment(2);
        let flow = Flow::start(Some(&fragment), &gated_context(), Content::standard());
        assert_eq!(flow.page(), Page::Results);
        assert_eq!(flow.results().unwrap().total_score, 50);
    }

    #[test]
    fn partial_link_with_satisfied_gate_resumes_assessment() {
        let mut answers = AnswerSet::new();
        for id in ["q1", "q2", "q3", "q4", "q5", "q6"] {
            answers.insert(id, 1).unwrap();
        }
        let fragment = format_fragment(&codec::encode(&answers));

        let flow = Flow::start(Some(&fragment), &gated_context(), Content::standard());
        assert_eq!(flow.page(), Page::Assessment);
        assert_eq!(flow.dimension_index(), 1);
        assert_eq!(flow.answers().len(), 6);
    }

    #[test]
    fn complete_link_without_gate_starts_at_gate_then_results() {
        let fragment = full_fragment(3);
        let mut ctx = SessionContext::new(MemorySessionStore::new());
        let mut flow = Flow::start(Some(&fragment), &ctx, Content::standard());
        assert_eq!(flow.page(), Page::Gate);

        let submitter = RecordingSubmitter::default();
        let page = flow
            .submit_gate(&mut ctx, &submitter, &ContactPolicy::new(), "ciso@company.com", true)
            .unwrap();
        assert_eq!(page, Page::Results);
        assert!(ctx.gate_satisfied());
    }

    #[test]
    fn garbage_link_is_no_prior_answers() {
        let flow = Flow::start(Some("#answers=%%%garbage"), &gated_context(), Content::standard());
        assert_eq!(flow.page(), Page::Assessment);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn rejected_contact_changes_nothing() {
        let mut ctx = SessionContext::new(MemorySessionStore::new());
        let mut flow = Flow::start(None, &ctx, Content::standard());
        let submitter = RecordingSubmitter::default();

        let err = flow
            .submit_gate(&mut ctx, &submitter, &ContactPolicy::new(), "user@gmail.com", true)
            .unwrap_err();
        assert!(matches!(err, FlowError::Contact(ContactError::PersonalDomain(_))));
        assert_eq!(flow.page(), Page::Gate);
        assert!(!ctx.gate_satisfied());
        assert!(submitter.sent.borrow().is_empty());
    }

    #[test]
    fn consent_is_required() {
        let mut ctx = SessionContext::new(MemorySessionStore::new());
        let mut flow = Flow::start(None, &ctx, Content::standard());
        let submitter = RecordingSubmitter::default();

        let err = flow
            .submit_gate(&mut ctx, &submitter, &ContactPolicy::new(), "user@company.com", false)
            .unwrap_err();
        assert_eq!(err, FlowError::ConsentRequired);
        assert_eq!(flow.page(), Page::Gate);
    }

    #[test]
    fn gate_is_soft_on_submission_failure() {
        let mut ctx = SessionContext::new(MemorySessionStore::new());
        let mut flow = Flow::start(None, &ctx, Content::standard());
        let submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };

        let page = flow
            .submit_gate(&mut ctx, &submitter, &ContactPolicy::new(), "user@company.com", true)
            .unwrap();
        assert_eq!(page, Page::Assessment);
        assert_eq!(
            submitter.sent.borrow()[0],
            Submission::Gate {
                email: "user@company.com".into(),
                source: GATE_SOURCE.into(),
            }
        );
    }

    #[test]
    fn next_requires_complete_dimension() {
        let mut flow = Flow::start(None, &gated_context(), Content::standard());
        flow.select("q1", 3).unwrap();

        let err = flow.next_dimension().unwrap_err();
        assert_eq!(
            err,
            FlowError::DimensionIncomplete {
                dimension: "Compliance Artifacts",
                remaining: 4
            }
        );
    }

    #[test]
    fn full_walkthrough_reaches_results() {
        let mut flow = Flow::start(None, &gated_context(), Content::standard());
        for i in 0..5 {
            assert_eq!(flow.dimension_index(), i);
            answer_current_dimension(&mut flow, 1);
            let advance = flow.next_dimension().unwrap();
            if i < 4 {
                assert_eq!(advance, Advance::Dimension(i + 1));
            } else {
                assert_eq!(advance, Advance::Results);
            }
        }

        assert_eq!(flow.page(), Page::Results);
        let results = flow.results().unwrap();
        assert_eq!(results.total_score, 25);
        assert_eq!(results.stage.id, "early-enterprise");
    }

    #[test]
    fn back_navigation_stops_at_first_dimension() {
        let mut flow = Flow::start(None, &gated_context(), Content::standard());
        assert_eq!(flow.previous_dimension(), Ok(false));
        answer_current_dimension(&mut flow, 0);
        flow.next_dimension().unwrap();
        assert_eq!(flow.previous_dimension(), Ok(true));
        assert_eq!(flow.dimension_index(), 0);
    }

    #[test]
    fn select_rejects_unknown_question_and_option() {
        let mut flow = Flow::start(None, &gated_context(), Content::standard());
        assert_eq!(
            flow.select("q99", 1),
            Err(FlowError::UnknownQuestion("q99".into()))
        );
        assert_eq!(
            flow.select("q1", 4),
            Err(FlowError::UnknownOption {
                question: "q1".into(),
                score: 4
            })
        );
    }

    #[test]
    fn select_is_only_valid_during_assessment() {
        let mut flow = Flow::start(None, &SessionContext::new(MemorySessionStore::new()), Content::standard());
        assert_eq!(
            flow.select("q1", 1),
            Err(FlowError::WrongPage {
                expected: Page::Assessment,
                actual: Page::Gate
            })
        );
    }

    #[test]
    fn fragment_tracks_answers_and_is_idempotent() {
        let mut flow = Flow::start(None, &gated_context(), Content::standard());
        flow.select("q1", 2).unwrap();

        let first = flow.fragment().unwrap();
        assert_eq!(flow.fragment().unwrap(), first);
        let decoded = codec::decode(answers_token(&first).unwrap()).unwrap();
        assert_eq!(decoded.get("q1"), Some(2));
    }

    #[test]
    fn retake_clears_answers_and_fragment() {
        let fragment = full_fragment(3);
        let mut flow = Flow::start(Some(&fragment), &gated_context(), Content::standard());
        flow.retake().unwrap();

        assert_eq!(flow.page(), Page::Assessment);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.fragment(), None);
        assert_eq!(flow.dimension_index(), 0);
    }

    #[test]
    fn contact_request_is_sent_once_with_score_and_stage() {
        let ctx = gated_context();
        let fragment = full_fragment(3);
        let mut flow = Flow::start(Some(&fragment), &ctx, Content::standard());
        let submitter = RecordingSubmitter::default();

        assert_eq!(flow.request_contact(&ctx, &submitter), Ok(true));
        assert_eq!(flow.request_contact(&ctx, &submitter), Ok(false));

        let sent = submitter.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            Submission::ResultsContact {
                email: "ciso@company.com".into(),
                source: RESULTS_CONTACT_SOURCE.into(),
                total_score: 75,
                stage: "Enterprise-Ready".into(),
            }
        );
    }

    #[test]
    fn failed_contact_request_still_counts_as_requested() {
        let ctx = gated_context();
        let fragment = full_fragment(1);
        let mut flow = Flow::start(Some(&fragment), &ctx, Content::standard());
        let submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };

        assert_eq!(flow.request_contact(&ctx, &submitter), Ok(true));
        assert!(flow.contact_requested());
    }
}
