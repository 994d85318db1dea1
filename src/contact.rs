//! Work-email validation for the contact gate.
//!
//! An address is accepted when it looks like `local@domain.tld` and its domain
//! is not a known personal or free-mail provider.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("address pattern is valid"));

/// Free-mail and personal providers that do not qualify as a work address.
pub const FREE_MAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.co.uk",
    "yahoo.co.in",
    "hotmail.com",
    "hotmail.co.uk",
    "outlook.com",
    "live.com",
    "msn.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "mail.com",
    "email.com",
    "usa.com",
    "protonmail.com",
    "proton.me",
    "pm.me",
    "zoho.com",
    "zohomail.com",
    "yandex.com",
    "yandex.ru",
    "tutanota.com",
    "tuta.io",
    "fastmail.com",
    "fastmail.fm",
    "gmx.com",
    "gmx.net",
    "gmx.de",
    "web.de",
    "mail.ru",
    "inbox.com",
    "hey.com",
    "duck.com",
];

const WORK_EMAIL_MESSAGE: &str = "Please use your work email — we built this for security teams evaluating their programs, not personal accounts.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your work email.")]
    Empty,
    #[error("{}", WORK_EMAIL_MESSAGE)]
    Malformed(String),
    #[error("{}", WORK_EMAIL_MESSAGE)]
    PersonalDomain(String),
}

/// Domains rejected at the gate: the built-in list plus configured extras.
#[derive(Debug, Clone, Default)]
pub struct ContactPolicy {
    extra_blocked_domains: Vec<String>,
}

impl ContactPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocked_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_blocked_domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn is_blocked(&self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        FREE_MAIL_DOMAINS.contains(&domain.as_str())
            || self.extra_blocked_domains.iter().any(|d| *d == domain)
    }
}

/// A contact address that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactAddress(String);

impl ContactAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for ContactAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate_contact(input: &str, policy: &ContactPolicy) -> Result<ContactAddress, ContactError> {
    let address = input.trim();
    if address.is_empty() {
        return Err(ContactError::Empty);
    }

    if !ADDRESS_PATTERN.is_match(address) {
        return Err(ContactError::Malformed(address.to_string()));
    }

    let domain = address.split('@').nth(1).unwrap_or_default();
    if policy.is_blocked(domain) {
        return Err(ContactError::PersonalDomain(domain.to_ascii_lowercase()));
    }

    Ok(ContactAddress(address.to_string()))
}
