use crate::config::{CardConfig, ServerConfig};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

/// Optional relay configuration file. Every key falls back to the built-in
/// default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub card: Option<CardConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public_dir: Option<PathBuf>,
    pub delivery_timeout_seconds: Option<u64>,
    pub allow_insecure_webhook: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RelayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${THEME_COLOR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 以檔案內容覆蓋內建預設值
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.server.host.unwrap_or(defaults.host),
            port: self.server.port.unwrap_or(defaults.port),
            public_dir: self.server.public_dir.unwrap_or(defaults.public_dir),
            delivery_timeout_seconds: self
                .server
                .delivery_timeout_seconds
                .unwrap_or(defaults.delivery_timeout_seconds),
            allow_insecure_webhook: self
                .server
                .allow_insecure_webhook
                .unwrap_or(defaults.allow_insecure_webhook),
            card: self.card.unwrap_or(defaults.card),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_server_config().validate()
    }
}
