//! Reversible text to URL-fragment-safe token transform.
//!
//! Text is percent-encoded first, then base64-encoded with the standard
//! alphabet. Decoding also accepts the URL-safe alphabet and missing padding,
//! since shared links get hand-edited and re-encoded along the way.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("token is empty")]
    Empty,
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token does not decode to UTF-8 text")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn to_token(text: &str) -> String {
    let escaped = urlencoding::encode(text);
    base64::engine::general_purpose::STANDARD.encode(escaped.as_bytes())
}

pub fn from_token(token: &str) -> Result<String, TransformError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TransformError::Empty);
    }

    let bytes = if token.contains(['-', '_']) {
        URL_SAFE_LENIENT.decode(token)?
    } else {
        STANDARD_LENIENT.decode(token)?
    };
    let escaped = String::from_utf8(bytes)?;
    Ok(urlencoding::decode(&escaped)?.into_owned())
}
