//! Body extraction for `POST /api/contacts`.
//!
//! Form-encoded bodies are decoded as such; anything else is read as JSON,
//! with or without a content type. An empty body is an empty submission, so
//! it is reported as missing fields rather than as a parse failure.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};

use crate::domain::model::ContactSubmission;
use crate::utils::error::RelayError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug)]
pub struct ContactPayload(pub ContactSubmission);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE));

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| RelayError::MalformedPayloadError {
                message: e.body_text(),
            })?;

        decode(&body, is_form).map(ContactPayload)
    }
}

fn decode(body: &[u8], is_form: bool) -> Result<ContactSubmission, RelayError> {
    // 空白內容視為空表單，交由必填欄位檢查處理
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactSubmission::default());
    }

    if is_form {
        serde_urlencoded::from_bytes(body).map_err(|e| RelayError::MalformedPayloadError {
            message: e.to_string(),
        })
    } else {
        serde_json::from_slice(body).map_err(|e| RelayError::MalformedPayloadError {
            message: e.to_string(),
        })
    }
}
