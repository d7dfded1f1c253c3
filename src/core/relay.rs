use crate::config::env::WEBHOOK_URL_VAR;
use crate::config::CardConfig;
use crate::core::card::build_card;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::{WebhookConfigSource, WebhookSender, WebhookTarget};
use crate::utils::error::{RelayError, Result};
use chrono::Utc;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Thank you for your interest! We will contact you shortly.";

/// Validates a submission, renders the card and forwards it to the webhook.
///
/// One call is one linear pass. Validation and configuration failures return
/// before any network traffic, and every failure is terminal for the call.
#[derive(Clone)]
pub struct ContactRelay {
    sender: Arc<dyn WebhookSender>,
    config: Arc<dyn WebhookConfigSource>,
    card: CardConfig,
}

impl ContactRelay {
    pub fn new(
        sender: Arc<dyn WebhookSender>,
        config: Arc<dyn WebhookConfigSource>,
        card: CardConfig,
    ) -> Self {
        Self {
            sender,
            config,
            card,
        }
    }

    pub async fn submit(&self, submission: ContactSubmission) -> Result<&'static str> {
        // 驗證必填欄位
        let contact = submission.accept().inspect_err(|e| {
            tracing::debug!("Rejected submission: {}", e);
        })?;

        // 每次請求都重新讀取 webhook 設定
        let Some(url) = self.config.webhook_url() else {
            tracing::error!("{} environment variable is not set", WEBHOOK_URL_VAR);
            return Err(RelayError::WebhookNotConfiguredError {
                variable: WEBHOOK_URL_VAR,
            });
        };

        let target = WebhookTarget {
            url,
            ca_bundle: self.config.ca_bundle(),
        };
        let card = build_card(&contact, &self.card, &Utc::now());

        // 傳送卡片，傳輸錯誤一律視為 500
        let response = match self.sender.send(&target, &card).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error sending to webhook: {}", e);
                return Err(e);
            }
        };

        if response.is_success() {
            tracing::info!("Contact form submitted successfully: {}", contact.email);
            Ok(SUCCESS_MESSAGE)
        } else {
            tracing::error!("Webhook responded with: {} - {}", response.status, response.body);
            Err(RelayError::WebhookRejectedError {
                status: response.status,
                body: response.body,
            })
        }
    }
}
