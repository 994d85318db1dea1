//! Outbound form submissions: gate sign-ups and results-contact requests.
//!
//! Submissions are best effort. A single attempt is made, there is no retry,
//! and callers log failures instead of surfacing them.

use crate::config::SubmissionConfig;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const GATE_SOURCE: &str = "enterprise-readiness-assessment";
pub const RESULTS_CONTACT_SOURCE: &str = "enterprise-readiness-results-contact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Gate {
        email: String,
        source: String,
    },
    #[serde(rename_all = "camelCase")]
    ResultsContact {
        email: String,
        source: String,
        total_score: u32,
        stage: String,
    },
}

impl Submission {
    pub fn source(&self) -> &str {
        match self {
            Submission::Gate { source, .. } | Submission::ResultsContact { source, .. } => source,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("submission endpoint answered with status {0}")]
    Status(u16),
    #[error("submissions are disabled")]
    Disabled,
}

pub trait Submitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmissionError>;
}

/// Posts submissions as JSON to a form-collection endpoint.
pub struct HttpSubmitter {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("readiness/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        tracing::debug!(source = submission.source(), endpoint = %self.endpoint, "posting submission");
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}

/// Offline mode: nothing leaves the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSubmitter;

impl Submitter for DisabledSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        tracing::info!(source = submission.source(), "submissions disabled; skipping");
        Err(SubmissionError::Disabled)
    }
}

/// Build the submitter described by configuration.
pub fn submitter_from_config(config: &SubmissionConfig, offline: bool) -> Box<dyn Submitter> {
    if offline || !config.enabled {
        return Box::new(DisabledSubmitter);
    }
    match HttpSubmitter::new(&config.endpoint, Duration::from_secs(config.timeout_secs)) {
        Ok(submitter) => Box::new(submitter),
        Err(e) => {
            tracing::warn!("could not build HTTP client, submissions disabled: {}", e);
            Box::new(DisabledSubmitter)
        }
    }
}

/// Fire-and-forget: one attempt, failure logged and swallowed. Returns whether it was delivered.
pub fn submit_best_effort(submitter: &dyn Submitter, submission: &Submission) -> bool {
    match submitter.submit(submission) {
        Ok(()) => true,
        Err(SubmissionError::Disabled) => false,
        Err(e) => {
            tracing::warn!(source = submission.source(), "submission failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn gate_payload_shape() {
        let submission = Submission::Gate {
            email: "a@company.com".into(),
            source: GATE_SOURCE.into(),
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({ "email": "a@company.com", "source": "enterprise-readiness-assessment" })
        );
    }

    #[test]
    fn results_contact_payload_uses_camel_case() {
        let submission = Submission::ResultsContact {
            email: "a@company.com".into(),
            source: RESULTS_CONTACT_SOURCE.into(),
            total_score: 42,
            stage: "Growth Enterprise".into(),
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "email": "a@company.com",
                "source": "enterprise-readiness-results-contact",
                "totalScore": 42,
                "stage": "Growth Enterprise",
            })
        );
    }

    #[test]
    fn disabled_submitter_is_not_delivered() {
        let submission = Submission::Gate {
            email: "a@company.com".into(),
            source: GATE_SOURCE.into(),
        };
        assert!(!submit_best_effort(&DisabledSubmitter, &submission));
    }

    #[test]
    fn unreachable_endpoint_is_swallowed() {
        let submitter = HttpSubmitter::new("http://127.0.0.1:9/submit", Duration::from_millis(200)).unwrap();
        let submission = Submission::Gate {
            email: "a@company.com".into(),
            source: GATE_SOURCE.into(),
        };
        assert!(!submit_best_effort(&submitter, &submission));
    }
}
