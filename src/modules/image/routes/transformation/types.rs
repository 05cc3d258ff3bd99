pub mod request {
    use crate::modules::upload::FileField;
    use axum_typed_multipart::TryFromMultipart;

    #[derive(TryFromMultipart)]
    pub struct Payload {
        #[form_data(limit = "unlimited")]
        pub file: Option<FileField>,
        /// JSON array of descriptor objects, e.g. `[{"effect":"grayscale"}]`.
        pub transformations: Option<String>,
    }
}

pub mod response {
    use crate::modules::upload;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Transformed {
            transformed_url: String,
            public_id: String,
            original_url: String,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Transformed {
                    transformed_url,
                    public_id,
                    original_url,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "transformedUrl": transformed_url,
                        "publicId": public_id,
                        "originalUrl": original_url
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
