//! HTTP surface for contact submissions.
//!
//! Routes:
//! - `POST /api/contacts`: validate and relay a submission
//! - `GET /up`: health check
//! - `GET /`: redirect to `/index.html`
//! - everything else: static files from the configured public directory
//!
//! Every response carries an `X-Request-Id` header. A caller-supplied id is
//! kept, otherwise a fresh one is generated.

pub mod handlers;
pub mod payload;
pub mod response;

use std::{fmt, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

use crate::core::relay::ContactRelay;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ContactRelay>,
}

impl AppState {
    pub fn new(relay: ContactRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub public_dir: Option<PathBuf>,
}

/// Correlation id for one request, available to handlers as an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let api_routes = Router::new().route("/api/contacts", post(handlers::create_contact));

    let mut router = Router::new()
        .route("/", get(handlers::root_redirect))
        .route("/up", get(handlers::health_check))
        .merge(api_routes);

    if let Some(public_dir) = options.public_dir {
        router = router.fallback_service(ServeDir::new(public_dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(assign_request_id))
        .with_state(state)
}

/// 沿用呼叫端的 X-Request-Id，沒有時產生新的 UUID
async fn assign_request_id(mut req: Request, next: Next) -> Response {
    let header_value = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty() && v.len() <= 128 && v.to_str().is_ok())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::try_from(Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });
    let request_id = RequestId(header_value.to_str().unwrap_or("unknown").to_string());
    req.extensions_mut().insert(request_id);

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
    response
}

/// Serves until CTRL+C or SIGTERM.
///
/// # Errors
///
/// Returns `std::io::Error` if the address cannot be bound.
pub async fn start_server(
    state: AppState,
    options: RouterOptions,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = create_router(state, options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                () = ctrl_c() => info!("🛑 CTRL+C received"),
                _ = sigterm.recv() => info!("🛑 SIGTERM received"),
            }
        }
        Err(e) => {
            warn!("SIGTERM handler unavailable, only CTRL+C stops the relay: {}", e);
            ctrl_c().await;
            info!("🛑 CTRL+C received");
        }
    }
    drain_notice();
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    ctrl_c().await;
    info!("🛑 CTRL+C received");
    drain_notice();
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("CTRL+C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

fn drain_notice() {
    warn!("Draining in-flight submissions before exit");
}
