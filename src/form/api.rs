use crate::domain::model::ContactSubmission;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

pub const CONTACTS_PATH: &str = "/api/contacts";

/// What the relay answered, as the form sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    #[serde(skip)]
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Posts one submission. Transport failures and unreadable replies are
    /// errors; any HTTP status with a JSON body is a reply.
    async fn post_contact(&self, submission: &ContactSubmission) -> Result<ApiReply>;
}

#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("endpoint", base_url)?;
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(CONTACTS_PATH))
            .map_err(|e| RelayError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: base_url.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn post_contact(&self, submission: &ContactSubmission) -> Result<ApiReply> {
        tracing::debug!("Posting contact form to: {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status().as_u16();
        let mut reply: ApiReply = response.json().await?;
        reply.status = status;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_joined_to_base() {
        let api = HttpContactApi::new("https://www.example.com/some/page").unwrap();
        assert_eq!(api.endpoint().as_str(), "https://www.example.com/api/contacts");
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(HttpContactApi::new("not a url").is_err());
    }
}
