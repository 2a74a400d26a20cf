use super::{AppState, process_query};
use crate::types::ResponseEnvelope;
use axum::extract::{Query, State};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::Instrument;

/// `GET /variants?chromosome=..&start=..&end=..`
pub async fn get_variants(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ResponseEnvelope {
    let params: Map<String, Value> = query
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();
    let params = Value::Object(params);

    let span = tracing::info_span!("get_variants", params = %params);
    process_query(&state, Some(&params)).instrument(span).await
}
