use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::error::{OldfilmsError, Result};

use super::upload;
use super::AppState;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Client UI document
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Full preset catalog as JSON, for populating the client's decade picker
#[get("/api/decades")]
pub async fn list_decades(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.decades())
}

/// Accept an upload, transcode it with the selected decade's look and
/// stream the result back as a download
///
/// Validation failures return 400 with a JSON error body; transcoding and
/// launch failures return 500. Nothing here brings the server down.
#[post("/api/process-video")]
pub async fn process_video(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<NamedFile> {
    let request = upload::receive(payload, &state.storage.upload_dir).await?;

    let output_path = state.storage.processed_dir.join(upload::output_filename(
        &request.timestamp,
        &request.id,
        request.decade,
    ));

    if let Err(err) = state
        .processor
        .process(
            &request.input_path,
            &output_path,
            request.decade,
            request.custom_options.as_ref(),
        )
        .await
    {
        error!("Processing failed: {}", err);
        return Err(err);
    }

    info!(
        "Serving {} as {}",
        output_path.display(),
        upload::download_filename(request.decade, &request.timestamp)
    );

    let file = NamedFile::open_async(&output_path)
        .await
        .map_err(OldfilmsError::Io)?;
    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(upload::download_filename(
            request.decade,
            &request.timestamp,
        ))],
    }))
}

/// Stop the server cleanly
///
/// Unauthenticated; intended for the local desktop shell only.
#[post("/shutdown")]
pub async fn shutdown(state: web::Data<AppState>) -> impl Responder {
    info!("Shutdown requested over HTTP");
    let _ = state.shutdown.send(()).await;
    HttpResponse::Ok().body("Server shutting down...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::presets::PresetCatalog;
    use crate::processing::VideoProcessor;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn test_state() -> (web::Data<AppState>, tokio::sync::mpsc::Receiver<()>) {
        let config = Config::default();
        let catalog = Arc::new(PresetCatalog::new());
        let (tx, rx) = tokio::sync::mpsc::channel(1);

        let state = web::Data::new(AppState {
            catalog: Arc::clone(&catalog),
            processor: VideoProcessor::new(config.encoder.clone(), catalog),
            storage: config.storage,
            shutdown: tx,
        });
        (state, rx)
    }

    #[actix_web::test]
    async fn test_index_serves_html() {
        let (state, _rx) = test_state();
        let app = test::init_service(App::new().app_data(state).service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_decades_listing_contains_all_presets() {
        let (state, _rx) = test_state();
        let app = test::init_service(App::new().app_data(state).service(list_decades)).await;

        let req = test::TestRequest::get().uri("/api/decades").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let listing = body.as_object().unwrap();
        assert_eq!(listing.len(), 10);
        assert_eq!(body["1980s"]["fps"], 25);
        assert_eq!(body["1900s"]["max_height"], 240);
        assert_eq!(body["1900s"]["options"]["sepia_intensity"]["min"], 0.5);
        assert_eq!(
            body["1920s"]["options"]["vignette_style"]["options"][1],
            "art_deco"
        );
    }

    #[actix_web::test]
    async fn test_shutdown_signals_the_listener() {
        let (state, mut rx) = test_state();
        let app = test::init_service(App::new().app_data(state).service(shutdown)).await;

        let req = test::TestRequest::post().uri("/shutdown").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(rx.try_recv().is_ok());
    }
}
