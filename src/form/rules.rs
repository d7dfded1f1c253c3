use crate::domain::model::{ContactSubmission, CONSENT_AFFIRMATIVE};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{is_valid_email, is_valid_phone};

pub const CONSENT_REQUIRED_MESSAGE: &str =
    "Please agree to receive communications from VouchPro before submitting.";
pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly.";

const MIN_NAME_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

/// Whole-form check run before the network call. Consent is checked first
/// because it has its own message.
pub fn validate_form(data: &ContactSubmission) -> Result<()> {
    if data.consent.as_deref() != Some(CONSENT_AFFIRMATIVE) {
        return Err(RelayError::FormValidationError {
            message: CONSENT_REQUIRED_MESSAGE.to_string(),
        });
    }

    let name_ok = data
        .name
        .as_deref()
        .is_some_and(|n| n.trim().chars().count() >= MIN_NAME_LENGTH);
    let email_ok = data.email.as_deref().is_some_and(is_valid_email);
    let mobile_ok = data.mobile.as_deref().is_some_and(is_valid_phone);
    let interest_ok = data.interest.as_deref().is_some_and(|i| !i.is_empty());

    if name_ok && email_ok && mobile_ok && interest_ok {
        Ok(())
    } else {
        Err(RelayError::FormValidationError {
            message: INVALID_FORM_MESSAGE.to_string(),
        })
    }
}

/// Single-field check used while the user types.
pub fn validate_input(kind: InputKind, value: &str, required: bool) -> bool {
    let value = value.trim();

    if value.is_empty() {
        return !required;
    }

    match kind {
        InputKind::Text => true,
        InputKind::Email => is_valid_email(value),
        InputKind::Tel => is_valid_phone(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: Some("Asha Rao".into()),
            email: Some("a@b.com".into()),
            mobile: Some("+1 555-123-4567".into()),
            interest: Some("Payroll".into()),
            message: Some(String::new()),
            consent: Some("true".into()),
        }
    }

    fn message_of(data: &ContactSubmission) -> String {
        validate_form(data).unwrap_err().user_friendly_message()
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_form(&valid()).is_ok());
    }

    #[test]
    fn test_consent_is_checked_first() {
        let mut data = valid();
        data.consent = Some("false".into());
        data.email = Some("a@b".into());
        assert_eq!(message_of(&data), CONSENT_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_email_without_tld_fails() {
        let mut data = valid();
        data.email = Some("a@b".into());
        assert_eq!(message_of(&data), INVALID_FORM_MESSAGE);
    }

    #[test]
    fn test_short_phone_fails() {
        let mut data = valid();
        data.mobile = Some("123".into());
        assert_eq!(message_of(&data), INVALID_FORM_MESSAGE);
    }

    #[test]
    fn test_single_letter_name_fails() {
        let mut data = valid();
        data.name = Some(" A ".into());
        assert!(validate_form(&data).is_err());
    }

    #[test]
    fn test_missing_interest_fails() {
        let mut data = valid();
        data.interest = None;
        assert!(validate_form(&data).is_err());
    }

    #[test]
    fn test_validate_input() {
        assert!(!validate_input(InputKind::Text, "  ", true));
        assert!(validate_input(InputKind::Text, "", false));
        assert!(!validate_input(InputKind::Email, "a@b", true));
        assert!(validate_input(InputKind::Email, " a@b.com ", true));
        assert!(!validate_input(InputKind::Tel, "123", false));
        assert!(validate_input(InputKind::Tel, "+1 555-123-4567", true));
    }
}
