pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BackgroundRemoved {
            public_id: String,
            secure_url: String,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BackgroundRemoved {
                    public_id,
                    secure_url,
                } => (
                    StatusCode::OK,
                    Json(json!({ "publicId": public_id, "secureUrl": secure_url })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
