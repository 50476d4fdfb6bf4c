pub mod api;
pub mod config;
pub mod intelligence;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{start_server_on, ApiContext};
use crate::config::{ConfigError, ServiceConfig};
use crate::pipeline::extraction::{CloudVisionOcr, ExtractionError, OcrEngine};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("OCR client error: {0}")]
    Ocr(#[from] ExtractionError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("Server error: {0}")]
    Server(String),
}

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = serve() {
        tracing::error!(error = %e, "{} failed to start", config::APP_NAME);
        std::process::exit(1);
    }
}

fn serve() -> Result<(), StartupError> {
    let config = ServiceConfig::from_env()?;

    // The blocking HTTP client must be created and dropped outside the
    // async runtime; `ocr` keeps the last reference on this thread.
    let ocr: Arc<dyn OcrEngine> = Arc::new(CloudVisionOcr::new(
        &config.vision_url,
        config.vision_api_key.clone(),
        config.ocr_timeout_secs,
    )?);
    if config.vision_api_key.is_none() {
        tracing::warn!("No vision API key configured; OCR requests will be unauthenticated");
    }

    let ctx = ApiContext::new(ocr.clone()).with_max_image_bytes(config.max_image_bytes);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        let mut server = start_server_on(ctx, config.bind_addr)
            .await
            .map_err(StartupError::Server)?;
        tracing::info!(
            addr = %server.session.server_addr,
            session_id = %server.session.session_id,
            "Listening, press Ctrl-C to stop"
        );

        tokio::signal::ctrl_c().await?;
        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        Ok::<(), StartupError>(())
    });

    drop(runtime);
    drop(ocr);
    result
}
