use super::AppState;
use crate::types::ServiceInfo;
use axum::{Json, extract::State};

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let variants_file = state
        .source
        .location()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Json(ServiceInfo {
        id: "org.example.vcfquery".to_string(),
        name: "vcfquery".to_string(),
        description: Some("Region queries against indexed VCF files".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        format: "VCF".to_string(),
        variants_file,
    })
}
