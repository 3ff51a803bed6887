//! Submission intake route
//!
//! `POST /submissions` accepts either a raw JSON body or a form-encoded
//! `payload=<escaped JSON>` field (both shapes exist among deployed
//! clients). The handler is the only write path: parse, validate, encode,
//! bootstrap the sheet, append, and answer with the stored row's position.
//! Every failure is caught here and becomes a `{success: false}` envelope;
//! nothing escapes to the transport layer.

use axum::{extract::State, Json};
use std::sync::Arc;

use playscale_core::{encode_row, validate, SubmissionPayload};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::SubmitResponse,
};

// ============================================================================
// PAYLOAD PARSING
// ============================================================================

/// Parse the request body into a submission payload.
///
/// A body that starts with `{` is treated as JSON; otherwise a
/// form-encoded `payload` field carrying an escaped JSON string is
/// accepted.
pub fn parse_payload(body: &str) -> ApiResult<SubmissionPayload> {
    let trimmed = body.trim();

    if trimmed.starts_with('{') {
        return SubmissionPayload::from_json(trimmed)
            .map_err(|e| ApiError::malformed_payload(format!("malformed payload: {}", e)));
    }

    if let Some(encoded) = form_field(trimmed, "payload") {
        let unplussed = encoded.replace('+', " ");
        let decoded = urlencoding::decode(&unplussed)
            .map_err(|e| ApiError::malformed_payload(format!("malformed payload: {}", e)))?;
        return SubmissionPayload::from_json(&decoded)
            .map_err(|e| ApiError::malformed_payload(format!("malformed payload: {}", e)));
    }

    Err(ApiError::malformed_payload("malformed payload"))
}

fn form_field(body: &str, name: &str) -> Option<String> {
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

// ============================================================================
// ROUTE HANDLER
// ============================================================================

/// POST /submissions - validate and store one survey submission
///
/// Parse and codec failures are detected before any storage mutation;
/// storage failures are surfaced without retry. The response is always an
/// HTTP 200 JSON envelope.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<SubmitResponse>> {
    let payload = parse_payload(&body)?;

    let record = validate(&payload).map_err(|e| {
        tracing::warn!(error = %e, "Rejected submission");
        e
    })?;

    // Encoding is pure; run it before the schema bootstrap so codec
    // failures leave storage untouched.
    let cells = encode_row(&record)?;

    state.sheet.ensure_ready().await?;
    let row = state.sheet.append(&cells).await?;

    tracing::info!(sheet = %state.sheet.name(), row, "Stored submission");
    Ok(Json(SubmitResponse::stored(row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{"name": "X", "age": 30}"#;

    #[test]
    fn test_parse_raw_json_body() {
        let payload = parse_payload(JSON).unwrap();
        assert_eq!(payload.name.as_deref(), Some("X"));
        assert_eq!(payload.age, Some(30));
    }

    #[test]
    fn test_parse_form_encoded_payload_field() {
        let body = format!("payload={}&other=1", urlencoding::encode(JSON));
        let payload = parse_payload(&body).unwrap();
        assert_eq!(payload.name.as_deref(), Some("X"));
    }

    #[test]
    fn test_parse_form_encoded_with_plus_spaces() {
        let body = "payload=%7B%22name%22%3A+%22X+Y%22%7D";
        let payload = parse_payload(body).unwrap();
        assert_eq!(payload.name.as_deref(), Some("X Y"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_payload("not json at all").unwrap_err();
        assert!(err.message.contains("malformed payload"));
    }

    #[test]
    fn test_parse_rejects_broken_json() {
        assert!(parse_payload(r#"{"name": "#).is_err());
    }
}
