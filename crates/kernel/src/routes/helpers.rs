//! Shared route helpers: the response envelope and multipart intake.

use axum::extract::multipart::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Success sentinel carried in `errorCode`.
///
/// Existing clients key on this exact value, so it must not change.
const ERROR_CODE_OK: &str = "NO";

/// Wire envelope shared by every endpoint.
///
/// HTTP status always mirrors `statusCode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub error_code: String,
    pub error_message: String,
}

/// Build a success response with the given status.
pub fn success<T: Serialize>(status: StatusCode, message: Option<&str>, data: T) -> Response {
    let envelope = Envelope {
        status_code: status.as_u16(),
        message: message.map(str::to_string),
        data: Some(data),
        error_code: ERROR_CODE_OK.to_string(),
        error_message: String::new(),
    };

    (status, Json(envelope)).into_response()
}

/// 200 OK with data.
pub fn ok<T: Serialize>(data: T) -> Response {
    success(StatusCode::OK, None, data)
}

/// 201 Created with data.
pub fn created<T: Serialize>(data: T) -> Response {
    success(StatusCode::CREATED, Some("created"), data)
}

/// Require an id that query extraction left optional.
pub fn require_id(id: Option<String>) -> AppResult<String> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(AppError::BadRequest("id is required".to_string())),
    }
}

/// Parts accepted by the multipart create/update endpoints.
#[derive(Debug, Default)]
pub struct MultipartPayload {
    /// The `data` part: entity fields as JSON.
    pub data: Option<Value>,
    /// The optional `image` part: raw file bytes.
    pub image: Option<Vec<u8>>,
}

/// Read the multipart form for create/update endpoints.
///
/// Unknown parts are skipped so browser form quirks don't reject the
/// whole submission; the strict boundary is the JSON in `data`.
pub async fn read_multipart(mut multipart: Multipart) -> AppResult<MultipartPayload> {
    let mut payload = MultipartPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        // Field readers consume the field, so take the name first.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("data") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("unreadable data part: {e}")))?;
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| AppError::BadRequest(format!("data part is not valid JSON: {e}")))?;
                payload.data = Some(value);
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("unreadable image part: {e}")))?;
                payload.image = Some(bytes.to_vec());
            }
            other => {
                debug!(part = ?other, "skipping unrecognized multipart part");
            }
        }
    }

    Ok(payload)
}

/// Deserialize the required `data` part into an input type.
pub fn parse_data<T: serde::de::DeserializeOwned>(payload: &mut MultipartPayload) -> AppResult<T> {
    let value = payload
        .data
        .take()
        .ok_or_else(|| AppError::BadRequest("multipart data part is required".to_string()))?;
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(format!("invalid payload: {e}")))
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn require_id_rejects_missing_and_blank() {
        assert!(require_id(None).is_err());
        assert!(require_id(Some("  ".to_string())).is_err());
        assert_eq!(require_id(Some("v1".to_string())).unwrap(), "v1");
    }

    #[test]
    fn success_envelope_uses_sentinel() {
        let envelope = Envelope {
            status_code: 200,
            message: None,
            data: Some(serde_json::json!({"ok": true})),
            error_code: ERROR_CODE_OK.to_string(),
            error_message: String::new(),
        };

        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["errorCode"], "NO");
        assert_eq!(body["errorMessage"], "");
        assert!(body.get("message").is_none());
    }
}
