use crate::utils::error::{RelayError, Result};
use crate::utils::validation::is_present;
use serde::{Deserialize, Deserializer, Serialize};

pub const CONSENT_AFFIRMATIVE: &str = "true";

/// A contact form submission as it arrives on the wire.
///
/// Every field is optional here so that absent and blank fields can be
/// reported together by [`ContactSubmission::accept`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "consent_from_string_or_bool")]
    pub consent: Option<String>,
}

/// A submission that passed server-side validation. Consent is implied:
/// [`ContactSubmission::accept`] only succeeds when it is affirmative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedContact {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub interest: String,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Names of required fields that are absent or blank. Consent counts as
    /// missing unless it is the affirmative value.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("mobile", &self.mobile),
            ("interest", &self.interest),
        ];
        for (field, value) in required {
            if !is_present(value.as_deref()) {
                missing.push(field);
            }
        }
        if self.consent.as_deref().map(str::trim) != Some(CONSENT_AFFIRMATIVE) {
            missing.push("consent");
        }
        missing
    }

    pub fn accept(self) -> Result<AcceptedContact> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RelayError::MissingFieldsError { fields: missing });
        }

        let message = self
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        Ok(AcceptedContact {
            name: self.name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
            mobile: self.mobile.unwrap_or_default().trim().to_string(),
            interest: self.interest.unwrap_or_default().trim().to_string(),
            message,
        })
    }
}

/// Accepts `"true"`, `"false"`, `true`, `false` or null for the consent field.
fn consent_from_string_or_bool<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConsentVisitor;

    impl<'de> serde::de::Visitor<'de> for ConsentVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a boolean or a boolean-as-string")
        }

        fn visit_bool<E: serde::de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_none<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Self::Value, D::Error> {
            d.deserialize_any(ConsentVisitor)
        }
    }

    deserializer.deserialize_any(ConsentVisitor)
}

/// Notification card in the chat connector's `MessageCard` schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub summary: String,
    pub sections: Vec<CardSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSection {
    #[serde(rename = "activityTitle")]
    pub activity_title: String,
    #[serde(rename = "activitySubtitle")]
    pub activity_subtitle: String,
    pub facts: Vec<CardFact>,
    pub markdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFact {
    pub name: String,
    pub value: String,
}

/// Raw outcome of one webhook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
