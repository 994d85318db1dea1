use super::AppContext;
use crate::contact::{validate_contact, ContactPolicy};
use anyhow::Result;

/// Succeeds when `email` would pass the contact gate.
pub fn handle_check_email(email: &str, app: &AppContext) -> Result<()> {
    let policy = ContactPolicy::with_blocked_domains(&app.config.contact.extra_blocked_domains);
    let address = validate_contact(email, &policy)?;
    println!("{} {}", app.formatting.success("accepted:"), address);
    Ok(())
}
