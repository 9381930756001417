//
// web.rs
// Dicom-Iod-rs
//
// Axum HTTP server exposing upload, module summaries, overlay listing, overlay extraction,
// validation and download.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt::Display;
use std::net::SocketAddr;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use dicom::object::open_file;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    dump, extract,
    models::{DatasetSummary, ExtractionReport, OverlaySummary, ValidationSummary},
    storage::FileStore,
    summary, validate,
};

#[derive(Clone)]
struct AppState {
    store: FileStore,
}

type ApiResult<T> = Result<T, (StatusCode, String)>;

fn router(store: FileStore) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/summary/:filename", get(summary_handler))
        .route("/api/overlays/:filename", get(overlays_handler))
        .route("/api/extract-overlays/:filename", post(extract_handler))
        .route("/api/validate/:filename", get(validate_handler))
        .route("/api/dump/:filename", get(dump_handler))
        .route("/api/download/:filename", get(download_handler))
        .with_state(AppState { store })
        .layer(CorsLayer::permissive())
}

pub async fn start_server(host: &str, port: u16, upload_dir: &std::path::Path) -> anyhow::Result<()> {
    let app = router(FileStore::new(upload_dir)?);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!(address = %addr, uploads = %upload_dir.display(), "server running");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "dicom-iod",
        "endpoints": [
            "POST /api/upload",
            "GET /api/summary/:filename",
            "GET /api/overlays/:filename",
            "POST /api/extract-overlays/:filename",
            "GET /api/validate/:filename",
            "GET /api/dump/:filename",
            "GET /api/download/:filename"
        ]
    }))
}

async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let mut original_name = None;
    let mut data = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        if field.name() == Some("file") {
            original_name = field.file_name().map(|s| s.to_string());
            data = Some(field.bytes().await.map_err(internal_error)?);
            break;
        }
    }

    let data = data.ok_or((StatusCode::BAD_REQUEST, "No file uploaded".to_string()))?;
    let saved_name = state
        .store
        .save(original_name.as_deref(), &data)
        .map_err(internal_error)?;
    let path = state.store.resolve(&saved_name).map_err(internal_error)?;

    let obj = open_file(&path).map_err(bad_request)?;
    let summary = summary::summarize_file(&obj);
    let validation = validate::validate_obj(&obj);

    Ok(Json(json!({
        "success": true,
        "filename": saved_name,
        "summary": summary,
        "validation": validation
    })))
}

async fn summary_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<DatasetSummary>> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    let summary = summary::read_summary(&path).map_err(internal_error)?;
    Ok(Json(summary))
}

async fn overlays_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<Vec<OverlaySummary>>> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    let obj = open_file(&path).map_err(internal_error)?;
    Ok(Json(summary::overlay_summaries(&obj)))
}

/// Writes `<name>-overlays.dcm` into the store; `output` names the stored file.
async fn extract_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<ExtractionReport>> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    let (derived_name, derived_path) = state.store.derived_path(&filename, "overlays");
    let mut report = extract::extract_file(&path, Some(&derived_path)).map_err(internal_error)?;
    report.input = filename;
    if report.extracted {
        report.output = Some(derived_name);
    }
    Ok(Json(report))
}

async fn validate_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<ValidationSummary>> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    let obj = open_file(&path).map_err(internal_error)?;
    Ok(Json(validate::validate_obj(&obj)))
}

async fn dump_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<String> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    dump::dump_to_string(&path, 4, 64).map_err(internal_error)
}

async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let path = state.store.resolve(&filename).map_err(not_found)?;
    let bytes = tokio::fs::read(&path).await.map_err(internal_error)?;
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .map_err(internal_error)?;
    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/dicom"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

fn bad_request<E: Display>(err: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}

fn internal_error<E: Display>(err: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
}

fn not_found<E: Display>(err: E) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn state() -> (tempfile::TempDir, AppState) {
        let root = tempdir().expect("tmpdir");
        let store = FileStore::new(root.path()).expect("store");
        (root, AppState { store })
    }

    #[tokio::test]
    async fn unknown_files_are_not_found() {
        let (_root, state) = state();
        let err = summary_handler(State(state.clone()), Path("missing.dcm".to_string()))
            .await
            .expect_err("missing file");
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        let err = extract_handler(State(state), Path("../etc/passwd".to_string()))
            .await
            .expect_err("escape");
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let Json(body) = root_handler().await;
        assert_eq!(body["service"], "dicom-iod");
        assert!(body["endpoints"].as_array().is_some_and(|e| e.len() == 7));
    }

    #[test]
    fn router_builds() {
        let (_root, state) = state();
        let _ = router(state.store);
    }
}
