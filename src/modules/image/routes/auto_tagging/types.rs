pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Tagged { image_url: String, tags: Vec<String> },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Tagged { image_url, tags } => (
                    StatusCode::OK,
                    Json(json!({ "imageUrl": image_url, "tags": tags })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
