pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Cropped {
            transformed_url: String,
            original_url: String,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cropped {
                    transformed_url,
                    original_url,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "transformedUrl": transformed_url,
                        "originalUrl": original_url
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
