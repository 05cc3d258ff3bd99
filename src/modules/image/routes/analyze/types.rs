pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    pub enum Success {
        Analyzed(Value),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Analyzed(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
