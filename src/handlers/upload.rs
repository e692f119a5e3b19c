use axum::extract::{Multipart, multipart::MultipartRejection};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::response::AppResponse;
use avatar_api::{ErrorResponse, UploadResponse};

const FILE_FIELD: &str = "file";

/// Multipart form accepted by `POST /upload-image/` (documentation only)
#[derive(ToSchema)]
#[allow(dead_code, reason = "only describes the multipart body in the OpenAPI document")]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// POST /upload-image/
/// Placeholder for the avatar pipeline: echoes the client filename and drops the bytes.
#[utoipa::path(
    post,
    path = "/upload-image/",
    tag = "Images",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Filename as sent by the client", body = UploadResponse),
        (status = 400, description = "Multipart body broken mid-stream", body = ErrorResponse),
        (status = 422, description = "Not multipart, or no file part", body = ErrorResponse)
    )
)]
pub async fn upload_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AppResponse<UploadResponse>, AppError> {
    let mut multipart = multipart?;
    // Outer None: no `file` part seen. Inner None: last `file` part was a plain field.
    let mut last_file: Option<Option<String>> = None;

    while let Some(mut field) = multipart.next_field().await? {
        // A repeated `file` key resolves to its last occurrence
        if field.name() == Some(FILE_FIELD) {
            last_file = Some(field.file_name().map(ToOwned::to_owned));
        }

        // Drain without buffering; nothing is stored
        while field.chunk().await?.is_some() {}
    }

    let filename = last_file
        .ok_or_else(|| AppError::validation("Missing multipart field 'file'"))?
        .ok_or_else(|| AppError::validation("Field 'file' must be a file upload"))?;

    tracing::info!(filename = %filename, "Image upload received, contents discarded");
    Ok(AppResponse::ok(UploadResponse { filename }))
}
