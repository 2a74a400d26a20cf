use super::{AppState, process_query};
use crate::types::{Event, EventResponse};
use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::Instrument;

/// Handle one raw invocation event.
///
/// Events that are not objects, or whose `queryStringParameters` is missing,
/// are answered with a 400 envelope like any other bad request.
pub async fn handle_event(state: &AppState, event: Value) -> EventResponse {
    let event: Event = if event.is_object() {
        serde_json::from_value(event).unwrap_or_default()
    } else {
        Event::default()
    };
    let params = event.query_string_parameters;

    let span = tracing::info_span!("event", params = ?params);
    process_query(state, params.as_ref())
        .instrument(span)
        .await
        .into_event_response()
}

/// `POST /invoke`: the gateway status is always 200, the real status is in
/// the payload. A body that is not JSON is treated as an empty event.
pub async fn invoke(State(state): State<AppState>, body: Bytes) -> Json<EventResponse> {
    let event = serde_json::from_slice(&body).unwrap_or(Value::Null);
    Json(handle_event(&state, event).await)
}
