use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const MALFORMED_PAYLOAD_MESSAGE: &str = "Malformed payload";
pub const NOT_CONFIGURED_MESSAGE: &str = "Webhook not configured";
pub const BAD_GATEWAY_MESSAGE: &str = "Failed to submit form";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFieldsError { fields: Vec<&'static str> },

    #[error("Malformed payload: {message}")]
    MalformedPayloadError { message: String },

    #[error("Form validation failed: {message}")]
    FormValidationError { message: String },

    #[error("Webhook URL is not configured ({variable} is unset or blank)")]
    WebhookNotConfiguredError { variable: &'static str },

    #[error("Webhook responded with: {status} - {body}")]
    WebhookRejectedError { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Submitter can fix it.
    Validation,
    /// Operator can fix it.
    Configuration,
    /// Webhook answered with a non-success status.
    Upstream,
    /// Network and IO failures.
    Transport,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::MissingFieldsError { .. }
            | RelayError::MalformedPayloadError { .. }
            | RelayError::FormValidationError { .. } => ErrorCategory::Validation,
            RelayError::WebhookNotConfiguredError { .. }
            | RelayError::ConfigError { .. }
            | RelayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RelayError::WebhookRejectedError { .. } => ErrorCategory::Upstream,
            RelayError::HttpError(_) | RelayError::IoError(_) => ErrorCategory::Transport,
        }
    }

    /// HTTP status reported back to the submitter.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MissingFieldsError { .. } | RelayError::FormValidationError { .. } => 422,
            RelayError::MalformedPayloadError { .. } => 400,
            RelayError::WebhookRejectedError { .. } => 502,
            _ => 500,
        }
    }

    /// Message safe to show to the submitter. Never includes internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::MissingFieldsError { .. } => MISSING_FIELDS_MESSAGE.to_string(),
            RelayError::MalformedPayloadError { .. } => MALFORMED_PAYLOAD_MESSAGE.to_string(),
            RelayError::FormValidationError { message } => message.clone(),
            RelayError::WebhookNotConfiguredError { .. } => NOT_CONFIGURED_MESSAGE.to_string(),
            RelayError::WebhookRejectedError { .. } => BAD_GATEWAY_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Correct the highlighted fields and submit again",
            ErrorCategory::Configuration => "Set TEAMS_WEBHOOK_URL and check the relay configuration",
            ErrorCategory::Upstream => "Check the webhook connector is still enabled",
            ErrorCategory::Transport => "Check network access and the CA bundle (SSL_CERT_FILE)",
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_per_category() {
        let missing = RelayError::MissingFieldsError { fields: vec!["email"] };
        assert_eq!(missing.status_code(), 422);
        assert_eq!(missing.category(), ErrorCategory::Validation);

        let unconfigured = RelayError::WebhookNotConfiguredError { variable: "TEAMS_WEBHOOK_URL" };
        assert_eq!(unconfigured.status_code(), 500);
        assert_eq!(unconfigured.category(), ErrorCategory::Configuration);

        let rejected = RelayError::WebhookRejectedError { status: 400, body: "bad card".into() };
        assert_eq!(rejected.status_code(), 502);
        assert_eq!(rejected.category(), ErrorCategory::Upstream);
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let io = RelayError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "/etc/secret/ca.pem",
        ));
        assert_eq!(io.status_code(), 500);
        assert_eq!(io.user_friendly_message(), INTERNAL_ERROR_MESSAGE);
        assert!(!io.user_friendly_message().contains("/etc/secret"));

        let rejected = RelayError::WebhookRejectedError { status: 500, body: "stack trace".into() };
        assert_eq!(rejected.user_friendly_message(), BAD_GATEWAY_MESSAGE);
    }

    #[test]
    fn test_missing_fields_display_lists_fields() {
        let err = RelayError::MissingFieldsError { fields: vec!["name", "consent"] };
        assert_eq!(err.to_string(), "Missing required fields: name, consent");
    }
}
