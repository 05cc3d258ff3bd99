pub mod policy;
pub mod relay;

use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use axum_typed_multipart::{BaseMultipart, FieldData, TryFromMultipart, TypedMultipartError};
use serde_json::json;
use tempfile::NamedTempFile;

pub type FileField = FieldData<NamedTempFile>;

/// Multipart extractor whose rejections use the same JSON error body as everything else.
pub type Multipart<T> = BaseMultipart<T, Error>;

/// Form shared by every feature that only takes a file.
#[derive(TryFromMultipart)]
pub struct FilePayload {
    #[form_data(limit = "unlimited")]
    pub file: Option<FileField>,
}

#[derive(Debug)]
pub enum Error {
    MalformedForm(String),
    Rejected(policy::Rejection),
    MissingField(&'static str),
    InvalidTransformations,
    UnreadableFile,
    NoFaceDetected,
    UpstreamUploadFailed(String),
    UpstreamTimeout,
    PersistenceFailed,
}

impl From<policy::Rejection> for Error {
    fn from(rejection: policy::Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl From<TypedMultipartError> for Error {
    fn from(err: TypedMultipartError) -> Self {
        tracing::warn!("Rejected malformed form: {}", err);
        Self::MalformedForm(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::MalformedForm(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Rejected(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.to_string() })),
            )
                .into_response(),
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("{} is required", field) })),
            )
                .into_response(),
            Self::InvalidTransformations => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid transformations" })),
            )
                .into_response(),
            Self::NoFaceDetected => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No faces detected. Please upload an image with a face." })),
            )
                .into_response(),
            Self::UnreadableFile => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read the uploaded file" })),
            )
                .into_response(),
            Self::UpstreamUploadFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({ "error": "Media service timed out" })),
            )
                .into_response(),
            Self::PersistenceFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Upload video failed" })),
            )
                .into_response(),
        }
    }
}
