use axum::{extract::State, response::Redirect, Extension, Json};
use serde::Serialize;
use tracing::instrument;

use crate::server::payload::ContactPayload;
use crate::server::response::MessageBody;
use crate::server::{AppState, RequestId};
use crate::utils::error::RelayError;

/// `POST /api/contacts`
///
/// # Errors
///
/// - 400: body could not be parsed
/// - 422: a required field is blank or consent was not given
/// - 500: webhook not configured, or the delivery failed in transport
/// - 502: webhook answered with a non-success status
#[instrument(name = "create_contact", skip_all, fields(request_id = %request_id.0))]
pub async fn create_contact(
    State(state): State<AppState>,
    request_id: Extension<RequestId>,
    ContactPayload(submission): ContactPayload,
) -> Result<Json<MessageBody>, RelayError> {
    let message = state.relay.submit(submission).await?;
    Ok(Json(MessageBody {
        message: message.to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /up`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /`
pub async fn root_redirect() -> Redirect {
    Redirect::to("/index.html")
}
