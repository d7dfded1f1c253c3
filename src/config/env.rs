use crate::domain::ports::WebhookConfigSource;
use std::env;
use std::path::PathBuf;

pub const WEBHOOK_URL_VAR: &str = "TEAMS_WEBHOOK_URL";
pub const CA_BUNDLE_VAR: &str = "SSL_CERT_FILE";

/// Reads the webhook settings from the process environment on every call.
#[derive(Debug, Clone, Default)]
pub struct EnvWebhookConfig;

impl EnvWebhookConfig {
    pub fn new() -> Self {
        Self
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl WebhookConfigSource for EnvWebhookConfig {
    fn webhook_url(&self) -> Option<String> {
        non_blank_var(WEBHOOK_URL_VAR)
    }

    fn ca_bundle(&self) -> Option<PathBuf> {
        non_blank_var(CA_BUNDLE_VAR).map(PathBuf::from)
    }
}

/// Fixed settings, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWebhookConfig {
    pub webhook_url: Option<String>,
    pub ca_bundle: Option<PathBuf>,
}

impl StaticWebhookConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            ca_bundle: None,
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl WebhookConfigSource for StaticWebhookConfig {
    fn webhook_url(&self) -> Option<String> {
        self.webhook_url.clone().filter(|v| !v.trim().is_empty())
    }

    fn ca_bundle(&self) -> Option<PathBuf> {
        self.ca_bundle.clone()
    }
}
