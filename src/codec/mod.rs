//! Answer codec: answer set to URL-fragment-safe token and back.
//!
//! Two layers, composed here and testable on their own:
//!
//! - [`text`]: answer set <-> canonical JSON text
//! - [`transform`]: text <-> base64 of the percent-encoded text
//!
//! The token is a portable serialization, not a secret. Anyone holding a link
//! can decode it, and nothing stops a link from being edited.

pub mod fragment;
pub mod text;
pub mod transform;

use crate::answers::AnswerSet;
use thiserror::Error;

pub use fragment::{answers_token, format_fragment, share_link, FRAGMENT_PREFIX};
pub use text::TextError;
pub use transform::TransformError;

/// Which layer rejected a token.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("token transform failed: {0}")]
    Transform(#[from] TransformError),
    #[error("answer text is malformed: {0}")]
    Text(#[from] TextError),
}

/// Encode an answer set as a token. An unserializable set yields an empty token.
pub fn encode(answers: &AnswerSet) -> String {
    match text::to_text(answers) {
        Ok(text) => transform::to_token(&text),
        Err(e) => {
            tracing::warn!("failed to serialize answers: {}", e);
            String::new()
        }
    }
}

/// Decode a token, reporting which layer failed.
pub fn try_decode(token: &str) -> Result<AnswerSet, CodecError> {
    let text = transform::from_token(token)?;
    Ok(text::from_text(&text)?)
}

/// Decode a token from an untrusted link. `None` means "no data".
pub fn decode(token: &str) -> Option<AnswerSet> {
    match try_decode(token) {
        Ok(answers) => Some(answers),
        Err(e) => {
            tracing::debug!("ignoring undecodable answers token: {}", e);
            None
        }
    }
}
