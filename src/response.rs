use crate::Error;
use crate::types::{EventResponse, ResponseEnvelope, Variant};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

pub const MSG_VARIANTS_FOUND: &str = "Variants found";
pub const MSG_NO_VARIANTS: &str = "No variants found";

/// Build the response envelope.
///
/// The status is decided by whether `variants` was given at all, before it
/// is defaulted to an empty list for display.
pub fn generate_response(
    message: &str,
    variants: Option<Vec<Variant>>,
    query: Option<Value>,
) -> ResponseEnvelope {
    let status = if variants.is_some() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    envelope(message, variants, query, status)
}

/// Envelope for a failed request, carrying the error's own status code
pub fn failure_response(error: &Error) -> ResponseEnvelope {
    envelope(error.message(), None, None, error.status_code())
}

/// Envelope for a successful lookup
pub fn success_response(variants: Vec<Variant>, query: Value) -> ResponseEnvelope {
    let message = if variants.is_empty() {
        MSG_NO_VARIANTS
    } else {
        MSG_VARIANTS_FOUND
    };
    generate_response(message, Some(variants), Some(query))
}

fn envelope(
    message: &str,
    variants: Option<Vec<Variant>>,
    query: Option<Value>,
    status: StatusCode,
) -> ResponseEnvelope {
    ResponseEnvelope {
        message: message.to_string(),
        variants: variants.unwrap_or_default(),
        query: query.unwrap_or_else(|| Value::Object(Default::default())),
        status_code: status.as_u16(),
    }
}

impl ResponseEnvelope {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Serialize into the `{ statusCode, body }` shape returned to the gateway
    pub fn into_event_response(self) -> EventResponse {
        let body = match serde_json::to_string(&self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("failed to serialize response: {}", e);
                return EventResponse {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    body: String::from("{}"),
                };
            }
        };
        EventResponse {
            status_code: self.status_code,
            body,
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
