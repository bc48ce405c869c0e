#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;
use thiserror::Error;

/// Payload handed to the message backend once validation passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission was rejected before reaching the backend.
///
/// The `Display` strings are shown to the user verbatim in an error toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Validate the four required fields and the email shape.
///
/// # Errors
///
/// [`FormError::MissingField`] if any trimmed field is empty,
/// [`FormError::InvalidEmail`] if the email is not
/// `local@domain.tld`-shaped. Validation never mutates the form.
pub fn validate(msg: &ContactMessage) -> Result<(), FormError> {
    let required = [&msg.name, &msg.email, &msg.subject, &msg.message];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(msg.email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a
/// non-empty local part, and a dot in the domain with characters on both
/// sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
