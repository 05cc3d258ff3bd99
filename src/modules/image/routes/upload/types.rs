pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ImageUploaded { public_id: String, url: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageUploaded { public_id, url } => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Image uploaded successfully",
                        "publicId": public_id,
                        "url": url
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
