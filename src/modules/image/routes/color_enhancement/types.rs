pub mod request {
    use serde::Deserialize;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Version {
        V1,
        V2,
    }

    #[derive(Deserialize, Default)]
    pub struct Query {
        pub version: Option<String>,
    }

    impl Query {
        /// Anything other than `2` selects the first version.
        pub fn version(&self) -> Version {
            match self.version.as_deref().map(str::trim) {
                Some("2") => Version::V2,
                _ => Version::V1,
            }
        }
    }
}

pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Enhanced {
            original_url: String,
            transformed_url: String,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Enhanced {
                    original_url,
                    transformed_url,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "originalUrl": original_url,
                        "transformedUrl": transformed_url
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
