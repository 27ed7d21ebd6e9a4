//! Contact form validation and submission flow.
//!
//! DESIGN
//! ======
//! [`ContactFlow`] is the whole lifecycle: `Idle` → (`begin` passes
//! validation) → `Sending` → (`finish`) → `Idle`. A rejected `begin` leaves
//! the flow untouched, so the host only has to show the returned notice. The
//! actual delivery belongs to a [`Submitter`]; the page ships with a
//! placeholder that waits and succeeds.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;

use crate::notify::NoticeKind;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully! Thank you for reaching out.";
pub const FAILED_MESSAGE: &str = "Message could not be sent. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(Field),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Your message is already being sent")]
    Busy,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission target unreachable")]
    Unreachable,
}

/// Raw values of the three contact inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
    }

    /// Every field non-blank, then a plausible email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [(Field::Name, &self.name), (Field::Email, &self.email), (Field::Message, &self.message)] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace, exactly one `@`, and a dot inside
/// the domain that has at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Delivers a validated message somewhere.
pub trait Submitter {
    fn submit(&self, fields: &ContactFields) -> impl Future<Output = Result<(), SubmitError>>;
}

/// What the host shows once a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub kind: NoticeKind,
    pub message: &'static str,
    /// Clear the inputs.
    pub reset: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFlow {
    phase: SubmitPhase,
    in_flight: Option<ContactFields>,
}

impl ContactFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// The message currently being delivered.
    #[must_use]
    pub fn in_flight(&self) -> Option<&ContactFields> {
        self.in_flight.as_ref()
    }

    /// Validate and enter `Sending`. On error nothing changes.
    pub fn begin(&mut self, fields: ContactFields) -> Result<(), ValidationError> {
        if self.is_sending() {
            return Err(ValidationError::Busy);
        }
        fields.validate()?;
        self.phase = SubmitPhase::Sending;
        self.in_flight = Some(fields);
        Ok(())
    }

    /// Leave `Sending` with the delivery result.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Completion {
        self.phase = SubmitPhase::Idle;
        self.in_flight = None;
        match result {
            Ok(()) => Completion { kind: NoticeKind::Success, message: SENT_MESSAGE, reset: true },
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                Completion { kind: NoticeKind::Error, message: FAILED_MESSAGE, reset: false }
            }
        }
    }
}
