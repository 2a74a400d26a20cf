use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vcfquery::{
    Config,
    handlers::{AppState, create_router},
    storage::LocalVariantFile,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source = Arc::new(LocalVariantFile::new(
        config.data_dir.clone(),
        config.variants_file.clone(),
    ));

    tracing::info!("Data directory: {:?}", source.data_dir());

    let state = AppState { source };

    let app = create_router(state);

    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let addr = config.bind_addr();
    tracing::info!("Starting vcfquery server on {}", addr);
    tracing::info!("Variants file: {:?}", config.variants_path());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
