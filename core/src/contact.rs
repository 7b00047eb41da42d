//! Contact-form message shared between the site and the worker relay.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 120;
pub const SUBJECT_MAX_LEN: usize = 200;
pub const MESSAGE_MAX_LEN: usize = 5000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if subject.is_empty() {
            return Err(ContactError::MissingField("subject"));
        }
        if message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(ContactError::TooLong("name"));
        }
        if subject.len() > SUBJECT_MAX_LEN {
            return Err(ContactError::TooLong("subject"));
        }
        if message.len() > MESSAGE_MAX_LEN {
            return Err(ContactError::TooLong("message"));
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// local@domain.tld with no whitespace; the mail provider does the real check.
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    MissingField(&'static str),
    TooLong(&'static str),
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "missing required field: {field}"),
            ContactError::TooLong(field) => write!(f, "field too long: {field}"),
            ContactError::InvalidEmail => write!(f, "invalid email format"),
        }
    }
}

impl std::error::Error for ContactError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Jan".to_string(),
            email: "jan@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn accepts_filled_message() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_fields() {
        let mut msg = filled();
        msg.subject = "   ".to_string();
        assert_eq!(msg.validate(), Err(ContactError::MissingField("subject")));
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["janexample.com", "jan@", "@example.com", "jan@example", "a b@c.d"] {
            let mut msg = filled();
            msg.email = email.to_string();
            assert_eq!(msg.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }
}
