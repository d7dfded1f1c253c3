use anyhow::Context;
use clap::Parser;
use contact_relay::domain::ports::WebhookConfigSource;
use contact_relay::utils::{logger, validation::Validate};
use contact_relay::adapters::tls::platform_candidates;
use contact_relay::adapters::WebhookClientConfig;
use contact_relay::{AppState, ContactRelay, EnvWebhookConfig, ReqwestWebhookSender, RouterOptions, ServeArgs};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting contact-relay");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證配置
    let config = args.resolve().context("Failed to load configuration")?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let webhook_config = EnvWebhookConfig::new();
    if webhook_config.webhook_url().is_none() {
        // Read again per request; startup only warns.
        tracing::warn!("TEAMS_WEBHOOK_URL is not set, submissions will fail until it is");
    }

    // 建立 webhook 客戶端
    let client_config = WebhookClientConfig {
        delivery_timeout: Duration::from_secs(config.delivery_timeout_seconds),
        allow_insecure: config.allow_insecure_webhook,
        ..WebhookClientConfig::default()
    };
    if client_config.allow_insecure {
        tracing::warn!("Plain http:// webhook URLs are allowed");
    }

    let relay = ContactRelay::new(
        Arc::new(ReqwestWebhookSender::new(client_config, platform_candidates())),
        Arc::new(webhook_config),
        config.card.clone(),
    );

    // 靜態目錄不存在時只提供 API
    let public_dir = config.public_dir.is_dir().then(|| config.public_dir.clone());
    if public_dir.is_none() {
        tracing::warn!("Static directory {} not found, serving API only", config.public_dir.display());
    }

    let options = RouterOptions { public_dir };

    let addr = config.socket_addr()?;
    contact_relay::server::start_server(AppState::new(relay), options, addr)
        .await
        .with_context(|| format!("HTTP server on {} failed", addr))?;

    Ok(())
}
