//! # HTTP Boundary
//!
//! The thin request/response layer over the catalog and processor: multipart
//! intake, the decade listing, the processing endpoint and a clean-shutdown
//! hook. Every request-path error is converted into a structured JSON
//! response here; nothing on this surface brings the process down.

pub mod routes;
pub mod upload;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpServer, ResponseError};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::{Config, StorageConfig};
use crate::error::{OldfilmsError, Result};
use crate::presets::PresetCatalog;
use crate::processing::VideoProcessor;

/// Shared state handed to every request handler
pub struct AppState {
    pub catalog: Arc<PresetCatalog>,
    pub processor: VideoProcessor,
    pub storage: StorageConfig,
    pub shutdown: mpsc::Sender<()>,
}

impl ResponseError for OldfilmsError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(json!({ "error": self.user_message() }))
    }
}

/// Run the HTTP server until it exits or is told to shut down
///
/// Builds the catalog, probes the transcoder (fatal if absent), creates the
/// working directories and serves until the listener stops or a
/// `POST /shutdown` arrives.
pub async fn run(config: Config) -> Result<()> {
    let catalog = Arc::new(PresetCatalog::new());
    catalog.validate()?;

    std::fs::create_dir_all(&config.storage.upload_dir)?;
    std::fs::create_dir_all(&config.storage.processed_dir)?;

    let processor = VideoProcessor::new(config.encoder.clone(), Arc::clone(&catalog));
    let banner = processor.probe().await?;
    info!("Transcoder available: {}", banner);

    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let state = web::Data::new(AppState {
        catalog,
        processor,
        storage: config.storage.clone(),
        shutdown: shutdown_tx,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(routes::index)
            .service(routes::list_decades)
            .service(routes::process_video)
            .service(routes::shutdown)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if shutdown_rx.recv().await.is_some() {
            handle.stop(true).await;
        }
    });

    info!(
        "Listening on http://{}:{}",
        config.server.host, config.server.port
    );
    server.await?;
    Ok(())
}
