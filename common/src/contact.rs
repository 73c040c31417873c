use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 5000;
pub const NAME_MAX_CHARS: usize = 200;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Name must be at most {NAME_MAX_CHARS} characters")]
    NameTooLong,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Message must be at least {MESSAGE_MIN_CHARS} characters")]
    MessageTooShort,
    #[error("Message must be at most {MESSAGE_MAX_CHARS} characters")]
    MessageTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactRequest {
    /// Trimmed copy of the request, or the first rule it breaks.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ContactError::NameTooLong);
        }
        if !EMAIL.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        match message.chars().count() {
            n if n < MESSAGE_MIN_CHARS => return Err(ContactError::MessageTooShort),
            n if n > MESSAGE_MAX_CHARS => return Err(ContactError::MessageTooLong),
            _ => {}
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_lowercase(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_request_is_trimmed() {
        let clean = request("  Asha ", " Asha@Example.org ", "  Hello there, namaste  ")
            .validate()
            .unwrap();
        assert_eq!(clean, request("Asha", "asha@example.org", "Hello there, namaste"));
    }

    #[test]
    fn each_rule_is_reported() {
        assert_eq!(
            request(" ", "a@b.co", "long enough text").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            request("A", "not-an-email", "long enough text").validate(),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            request("A", "a@b.co", "too short").validate(),
            Err(ContactError::MessageTooShort)
        );
        assert_eq!(
            request("A", "a@b.co", &"x".repeat(MESSAGE_MAX_CHARS + 1)).validate(),
            Err(ContactError::MessageTooLong)
        );
    }
}
