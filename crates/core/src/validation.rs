//! Input checks run before anything reaches storage

use crate::config::AccountPolicy;
use crate::error::{Error, Result};

const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Registration form: every field present, lengths within policy,
/// confirmation identical to the password.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirmation: &str,
    policy: AccountPolicy,
) -> Result<()> {
    if username.is_empty() || password.is_empty() || confirmation.is_empty() {
        return Err(Error::validation(FILL_ALL_FIELDS));
    }

    if username.chars().count() < policy.min_username_len {
        return Err(Error::validation(format!(
            "Username must be at least {} characters",
            policy.min_username_len
        )));
    }

    if password.chars().count() < policy.min_password_len {
        return Err(Error::validation(format!(
            "Password must be at least {} characters",
            policy.min_password_len
        )));
    }

    if password != confirmation {
        return Err(Error::validation("Passwords do not match"));
    }

    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::validation(FILL_ALL_FIELDS));
    }
    Ok(())
}

/// Returns the trimmed title and description
pub fn validate_note(title: &str, description: &str) -> Result<(String, String)> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::validation("Title is required"));
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(Error::validation("Description is required"));
    }

    Ok((title.to_string(), description.to_string()))
}
