pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod form;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ServeArgs, SubmitArgs};

pub use adapters::ReqwestWebhookSender;
pub use config::{CardConfig, EnvWebhookConfig, ServerConfig, StaticWebhookConfig};
pub use core::relay::ContactRelay;
pub use domain::model::ContactSubmission;
pub use server::{create_router, AppState, RouterOptions};
pub use utils::error::{RelayError, Result};
