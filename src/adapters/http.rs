//! reqwest-backed webhook delivery.

use crate::adapters::tls::{self, TrustSource};
use crate::domain::model::{MessageCard, WebhookResponse};
use crate::domain::ports::{WebhookSender, WebhookTarget};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info_span, Instrument};

#[derive(Debug, Clone)]
pub struct WebhookClientConfig {
    pub connect_timeout: Duration,
    /// Applies to each read, so a trickling body can outlive it.
    pub read_timeout: Duration,
    /// Deadline for the whole delivery, response body included.
    pub delivery_timeout: Duration,
    /// Accept plain `http://` webhook URLs.
    pub allow_insecure: bool,
    pub user_agent: String,
}

impl Default for WebhookClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(10),
            delivery_timeout: Duration::from_secs(25),
            allow_insecure: false,
            user_agent: concat!("contact-relay/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl WebhookClientConfig {
    /// Defaults plus plain-http delivery, for local connectors and mocks.
    pub fn insecure() -> Self {
        Self {
            allow_insecure: true,
            ..Self::default()
        }
    }
}

/// Sends each card with a client built for that request, so the trust store
/// follows the CA bundle configured at request time.
#[derive(Debug, Clone)]
pub struct ReqwestWebhookSender {
    config: WebhookClientConfig,
    ca_candidates: Vec<PathBuf>,
}

impl ReqwestWebhookSender {
    pub fn new(config: WebhookClientConfig, ca_candidates: Vec<PathBuf>) -> Self {
        Self {
            config,
            ca_candidates,
        }
    }

    async fn build_client(&self, target: &WebhookTarget) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .read_timeout(self.config.read_timeout)
            .timeout(self.config.delivery_timeout)
            .user_agent(&self.config.user_agent);

        // 依序選擇憑證來源：設定檔、平台預設路徑、內建根憑證
        let trust = tls::resolve_trust(target.ca_bundle.as_deref(), &self.ca_candidates);
        tracing::debug!("Webhook trust source: {:?}", trust);

        match &trust {
            TrustSource::Configured(path) => {
                let certificates = tls::load_bundle(path).await?;
                builder = builder.tls_built_in_root_certs(false);
                for certificate in certificates {
                    builder = builder.add_root_certificate(certificate);
                }
            }
            // 備用憑證無法使用時改用內建根憑證
            TrustSource::Fallback(path) => match tls::load_bundle(path).await {
                Ok(certificates) => {
                    builder = builder.tls_built_in_root_certs(false);
                    for certificate in certificates {
                        builder = builder.add_root_certificate(certificate);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping unreadable CA bundle {}: {}; using platform roots",
                        path.display(),
                        e
                    );
                }
            },
            TrustSource::Platform => {}
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl WebhookSender for ReqwestWebhookSender {
    async fn send(&self, target: &WebhookTarget, card: &MessageCard) -> Result<WebhookResponse> {
        validate_url("webhook_url", &target.url)?;
        if target.url.starts_with("http://") {
            if !self.config.allow_insecure {
                return Err(RelayError::InvalidConfigValueError {
                    field: "webhook_url".to_string(),
                    value: target.url.clone(),
                    reason: "Webhook URL must use HTTPS".to_string(),
                });
            }
            tracing::warn!("Webhook URL is not using HTTPS");
        }

        let span = info_span!("webhook_delivery", summary = %card.summary);

        async move {
            let client = self.build_client(target).await?;
            let started = std::time::Instant::now();

            let response = client.post(&target.url).json(card).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            tracing::debug!(status, duration_ms = started.elapsed().as_millis(), "Webhook answered");
            Ok::<_, RelayError>(WebhookResponse { status, body })
        }
        .instrument(span)
        .await
    }
}
