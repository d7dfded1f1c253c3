use crate::config::{ServerConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-relay")]
#[command(about = "Relays website contact form submissions to a chat webhook")]
pub struct ServeArgs {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Bind host (overrides the config file)")]
    pub host: Option<String>,

    #[arg(long, help = "Bind port (overrides the config file)")]
    pub port: Option<u16>,

    #[arg(long, help = "Directory of static site files")]
    pub public_dir: Option<PathBuf>,

    #[arg(long, help = "Accept plain http:// webhook URLs")]
    pub allow_insecure_webhook: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServeArgs {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_server_config(),
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(public_dir) = &self.public_dir {
            config.public_dir = public_dir.clone();
        }
        if self.allow_insecure_webhook {
            config.allow_insecure_webhook = true;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-submit")]
#[command(about = "Submits the contact form to a running relay")]
pub struct SubmitArgs {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub endpoint: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub mobile: String,

    #[arg(long, default_value = "")]
    pub interest: String,

    #[arg(long, default_value = "")]
    pub message: String,

    #[arg(long, help = "Agree to receive communications")]
    pub consent: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = ServeArgs::parse_from(["contact-relay", "--port", "8081", "--host", "0.0.0.0"]);
        let config = args.resolve().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(!config.allow_insecure_webhook);
    }

    #[test]
    fn test_insecure_webhook_flag_opts_in() {
        let args = ServeArgs::parse_from(["contact-relay", "--allow-insecure-webhook"]);
        assert!(args.resolve().unwrap().allow_insecure_webhook);
    }

    #[test]
    fn test_submit_args_parse_consent_flag() {
        let args = SubmitArgs::parse_from(["contact-submit", "--name", "Asha", "--consent"]);
        assert_eq!(args.name, "Asha");
        assert!(args.consent);
        assert_eq!(args.endpoint, "http://127.0.0.1:3000");
    }
}
