//! Document processing route: upload → text → study aids.

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use studysage_core::Error;
use studysage_generate::StudyPack;
use tracing::{debug, error, info, warn};

use super::detail;
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

type ApiError = (StatusCode, Json<Value>);

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/process-file/", post(process_file))
        .route("/process-file", post(process_file))
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /process-file/ — extract text and build summary, notes, flashcards
/// and questions.
async fn process_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StudyPack>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        detail(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;
    let upload = read_upload(multipart).await?;
    info!("Processing upload {} ({} bytes)", upload.filename, upload.bytes.len());

    if upload.bytes.is_empty() {
        return Err(error_response(&Error::EmptyInput));
    }

    let summarizer = state.summarizer.clone();
    let bytes = upload.bytes;
    let result = tokio::task::spawn_blocking(move || {
        let text = studysage_ingest::extract_text(&bytes)?;
        debug!("Extracted {} chars", text.len());
        Ok::<_, Error>(StudyPack::build(&text, &summarizer))
    })
    .await;

    match result {
        Ok(Ok(pack)) => Ok(Json(pack)),
        Ok(Err(e)) => {
            warn!("Failed to process {}: {}", upload.filename, e);
            Err(error_response(&e))
        }
        Err(e) => {
            error!("Processing task for {} aborted: {}", upload.filename, e);
            Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Processing failed"))
        }
    }
}

/// Pull the `file` field out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(multipart_error)?;

        let Some(field) = field else {
            return Err(detail(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Missing '{}' field", FILE_FIELD),
            ));
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        return Ok(Upload {
            filename,
            bytes: bytes.to_vec(),
        });
    }
}

/// A body over the upload limit keeps its 413; any other broken stream is
/// an unprocessable request.
fn multipart_error(error: MultipartError) -> ApiError {
    let status = match error.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    detail(status, error.body_text())
}

fn error_response(error: &Error) -> ApiError {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    detail(status, error.to_string())
}
