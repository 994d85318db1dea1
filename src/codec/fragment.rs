//! `#answers=<token>` address fragments and shareable links.

use crate::answers::AnswerSet;

pub const FRAGMENT_PREFIX: &str = "#answers=";

pub fn format_fragment(token: &str) -> String {
    format!("{FRAGMENT_PREFIX}{token}")
}

/// Extract the answers token from a bare fragment, a full URL, or a raw token.
///
/// Returns `None` when a fragment is present but is not an `answers=` fragment.
pub fn answers_token(input: &str) -> Option<&str> {
    let input = input.trim();
    let token = match input.find('#') {
        Some(hash) => input[hash..].strip_prefix(FRAGMENT_PREFIX)?,
        None => input.strip_prefix(&FRAGMENT_PREFIX[1..]).unwrap_or(input),
    };
    (!token.is_empty()).then_some(token)
}

/// `base_url` with the answer fragment attached. Any existing fragment is replaced.
pub fn share_link(base_url: &str, answers: &AnswerSet) -> String {
    let base = base_url.split('#').next().unwrap_or(base_url);
    format!("{base}{}", format_fragment(&super::encode(answers)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_from_bare_fragment() {
        assert_eq!(answers_token("#answers=abc"), Some("abc"));
    }

    #[test]
    fn token_from_full_url() {
        assert_eq!(
            answers_token("https://example.com/assessment#answers=JTdCJTdE"),
            Some("JTdCJTdE")
        );
    }

    #[test]
    fn raw_token_passes_through() {
        assert_eq!(answers_token("JTdCJTdE"), Some("JTdCJTdE"));
        assert_eq!(answers_token("answers=JTdCJTdE"), Some("JTdCJTdE"));
    }

    #[test]
    fn foreign_or_empty_fragments_yield_nothing() {
        assert_eq!(answers_token("https://example.com/#top"), None);
        assert_eq!(answers_token("#answers="), None);
        assert_eq!(answers_token(""), None);
    }

    #[test]
    fn share_link_replaces_existing_fragment() {
        let link = share_link("https://example.com/a#old", &AnswerSet::new());
        assert_eq!(link, "https://example.com/a#answers=JTdCJTdE");
    }
}
