pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Compressed {
            original_url: String,
            compressed_url: String,
            original_size: u64,
            compressed_size: u64,
            compression_ratio: f64,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Compressed {
                    original_url,
                    compressed_url,
                    original_size,
                    compressed_size,
                    compression_ratio,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "originalUrl": original_url,
                        "compressedUrl": compressed_url,
                        "originalSize": original_size,
                        "compressedSize": compressed_size,
                        "compressionRatio": compression_ratio
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
