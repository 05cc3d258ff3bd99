pub mod request {
    use crate::modules::upload::FileField;
    use axum_typed_multipart::TryFromMultipart;
    use validator::Validate;

    #[derive(TryFromMultipart)]
    pub struct Payload {
        #[form_data(limit = "unlimited")]
        pub file: Option<FileField>,
        pub title: Option<String>,
        pub description: Option<String>,
        #[form_data(field_name = "originalSize")]
        pub original_size: Option<String>,
    }

    #[derive(Validate, Debug)]
    pub struct Details {
        #[validate(length(max = 255, message = "Title must be 255 characters or less"))]
        pub title: String,
        #[validate(length(max = 1000, message = "Description must be 1000 characters or less"))]
        pub description: String,
        pub original_size: String,
    }
}

pub mod response {
    use crate::modules::{upload, video::repository::Video};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        VideoCreated(Video),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::VideoCreated(video) => (StatusCode::CREATED, Json(video)).into_response(),
            }
        }
    }

    pub type Response = Result<Success, upload::Error>;
}
