use crate::domain::model::{MessageCard, WebhookResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the relay learns the webhook target. Implementations are consulted on
/// every request so configuration changes apply without a restart.
pub trait WebhookConfigSource: Send + Sync {
    fn webhook_url(&self) -> Option<String>;
    fn ca_bundle(&self) -> Option<PathBuf>;
}

/// Resolved destination for a single delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    pub url: String,
    pub ca_bundle: Option<PathBuf>,
}

#[async_trait]
pub trait WebhookSender: Send + Sync {
    async fn send(&self, target: &WebhookTarget, card: &MessageCard) -> Result<WebhookResponse>;
}
