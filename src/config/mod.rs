#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

pub use env::{EnvWebhookConfig, StaticWebhookConfig};
pub use toml_config::TomlConfig;

/// Branding applied to every notification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_activity_title")]
    pub activity_title: String,
}

fn default_theme_color() -> String {
    "00d4aa".to_string()
}

fn default_summary() -> String {
    "New Lead from VouchPro Website".to_string()
}

fn default_activity_title() -> String {
    "📋 New Contact Form Submission".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme_color: default_theme_color(),
            summary: default_summary(),
            activity_title: default_activity_title(),
        }
    }
}

impl Validate for CardConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("card.theme_color", &self.theme_color)?;
        validate_non_empty_string("card.summary", &self.summary)?;
        validate_non_empty_string("card.activity_title", &self.activity_title)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,              // 靜態網站目錄
    pub delivery_timeout_seconds: u64,    // webhook 整體傳送期限 (含回應內容)
    pub allow_insecure_webhook: bool,     // 是否允許 http:// webhook
    pub card: CardConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            delivery_timeout_seconds: 25,
            allow_insecure_webhook: false,
            card: CardConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 取得伺服器綁定位址
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|e| crate::utils::error::RelayError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: raw.clone(),
                reason: format!("Invalid bind address: {}", e),
            })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        // 驗證綁定位址
        validate_non_empty_string("server.host", &self.host)?;
        self.socket_addr()?;

        // 驗證 webhook 傳送期限
        validate_range("server.delivery_timeout_seconds", self.delivery_timeout_seconds, 1, 300)?;

        // 驗證卡片樣式
        self.card.validate()
    }
}
