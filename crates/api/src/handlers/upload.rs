//! Handler for stamp image uploads.
//!
//! Files land under the configured upload directory with a UUID filename;
//! the returned URL is served back by the static `/uploads` route.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stampa_core::error::CoreError;
use stampa_core::upload::{unique_filename, validate_content_type, validate_size};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub url: String,
    pub filename: String,
}

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a single `file` field containing a stamp
/// image. Validates type and size, stores the file under a server-generated
/// name, and returns its public URL.
pub async fn upload_stamp(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let field = loop {
        match multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
        {
            Some(f) if f.name() == Some("file") => break f,
            Some(_) => continue,
            None => {
                return Err(AppError::Core(CoreError::Validation(
                    "Multipart field 'file' is required".into(),
                )))
            }
        }
    };

    let original_name = field
        .file_name()
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("Uploaded file needs a filename".into()))
        })?
        .to_string();

    let content_type = field
        .content_type()
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Uploaded file needs a content type".into(),
            ))
        })?
        .to_string();
    validate_content_type(&content_type)?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
    validate_size(bytes.len(), state.config.max_upload_bytes)?;

    let filename = unique_filename(&original_name)?;
    let path = std::path::Path::new(&state.config.upload_dir).join(&filename);

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        user_id = auth.user_id,
        filename = %filename,
        size_bytes = bytes.len(),
        "Stamp uploaded"
    );

    let url = format!(
        "{}/uploads/{filename}",
        state.config.public_base_url.trim_end_matches('/')
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResult { url, filename },
        }),
    ))
}
