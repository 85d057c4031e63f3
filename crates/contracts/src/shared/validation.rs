//! Contact form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::notification::Notify;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Rules for a single text field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub min_length: Option<usize>,
    pub email: bool,
}

impl ValidationRules {
    pub const fn min(len: usize) -> Self {
        Self {
            min_length: Some(len),
            email: false,
        }
    }

    pub const fn email() -> Self {
        Self {
            min_length: None,
            email: true,
        }
    }

    /// Length is counted in characters, not bytes.
    pub fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        if value.is_empty() {
            return false;
        }
        if self.min_length.is_some_and(|min| len < min) {
            return false;
        }
        !self.email || is_valid_email(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name (at least 2 characters)")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a subject (at least 5 characters)")]
    Subject,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

const NAME: ValidationRules = ValidationRules::min(2);
const EMAIL_RULES: ValidationRules = ValidationRules::email();
const SUBJECT: ValidationRules = ValidationRules::min(5);
const MESSAGE: ValidationRules = ValidationRules::min(10);

/// Fields posted by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Checks fields in form order and reports the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !NAME.check(&self.name) {
            return Err(ValidationError::Name);
        }
        if !EMAIL_RULES.check(&self.email) {
            return Err(ValidationError::Email);
        }
        if !SUBJECT.check(&self.subject) {
            return Err(ValidationError::Subject);
        }
        if !MESSAGE.check(&self.message) {
            return Err(ValidationError::Message);
        }
        Ok(())
    }

    /// Gate in front of submission. On failure the first failing field is
    /// reported once through `notifier` and nothing may be sent.
    pub fn check(&self, notifier: &impl Notify) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("contact form rejected: {:?}", e);
                notifier.error(&e.to_string());
                false
            }
        }
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::testing::RecordingNotifier;
    use crate::shared::notification::NotificationKind;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Project inquiry".into(),
            message: "I would like to talk about a website.".into(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_short_name_rejected_first() {
        let msg = ContactMessage {
            name: "A".into(),
            email: "broken".into(),
            ..valid()
        };
        let err = msg.validate().unwrap_err();
        assert_eq!(err, ValidationError::Name);
        assert_eq!(
            err.to_string(),
            "Please enter a valid name (at least 2 characters)"
        );
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));

        let msg = ContactMessage { email: "nope@".into(), ..valid() };
        assert_eq!(msg.validate(), Err(ValidationError::Email));
    }

    #[test]
    fn test_subject_and_message_lengths() {
        let msg = ContactMessage { subject: "Hi".into(), ..valid() };
        assert_eq!(msg.validate(), Err(ValidationError::Subject));

        let msg = ContactMessage { message: "Too short".into(), ..valid() };
        assert_eq!(msg.validate(), Err(ValidationError::Message));
    }

    #[test]
    fn test_length_counts_chars() {
        let msg = ContactMessage { name: "Żo".into(), ..valid() };
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn test_check_reports_first_failure_once() {
        let notifier = RecordingNotifier::default();
        let msg = ContactMessage {
            name: "A".into(),
            subject: "Hi".into(),
            ..valid()
        };

        assert!(!msg.check(&notifier));
        assert_eq!(
            *notifier.sent.borrow(),
            vec![(
                NotificationKind::Error,
                "Please enter a valid name (at least 2 characters)".to_string()
            )]
        );
    }

    #[test]
    fn test_check_passes_silently() {
        let notifier = RecordingNotifier::default();
        assert!(valid().check(&notifier));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_lengths_use_raw_input() {
        // surrounding whitespace counts, as typed
        let msg = ContactMessage { name: " A".into(), ..valid() };
        assert_eq!(msg.validate(), Ok(()));

        let msg = ContactMessage { email: " ada@example.com".into(), ..valid() };
        assert_eq!(msg.validate(), Err(ValidationError::Email));
    }

    #[test]
    fn test_form_body() {
        let body = ContactMessage {
            name: "Ada L".into(),
            email: "ada@example.com".into(),
            subject: "Hello there".into(),
            message: "a&b=c".into(),
        }
        .to_form_body()
        .unwrap();
        assert!(body.starts_with("name=Ada"));
        assert!(body.contains("&email=ada"));
        assert!(body.contains("message=a%26b%3Dc"));
    }
}
