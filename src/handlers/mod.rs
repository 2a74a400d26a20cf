mod invoke;
mod service_info;
mod variants;

pub use invoke::{handle_event, invoke};
pub use service_info::service_info;
pub use variants::get_variants;

use crate::lookup::lookup_variants;
use crate::request::extract_query_region;
use crate::response::{failure_response, success_response};
use crate::storage::VariantSource;
use crate::types::ResponseEnvelope;
use axum::{
    Router,
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn VariantSource>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/variants", get(get_variants))
        .route("/invoke", post(invoke))
        .route("/", get(service_info))
        .route("/service-info", get(service_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Validate, look up, build: one linear pass per request.
///
/// Never fails; every outcome is an envelope.
pub async fn process_query(state: &AppState, params: Option<&Value>) -> ResponseEnvelope {
    let region = match extract_query_region(params) {
        Ok(region) => region,
        Err(e) => return failure_response(&e),
    };

    match lookup_variants(state.source.as_ref(), &region).await {
        Ok(variants) => success_response(variants, region.echo()),
        Err(e) => failure_response(&e),
    }
}
