mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/image-transformation", post(handler::handler))
}

#[cfg(test)]
mod tests {
    use super::service::parse_transformations;
    use crate::{
        modules::upload::Error,
        utils::testing::{self, FakeMediaService, Form, MB},
    };
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[test]
    fn missing_transformations_mean_none() {
        assert!(parse_transformations(None).unwrap().is_empty());
        assert!(parse_transformations(Some("  ")).unwrap().is_empty());
        assert!(matches!(
            parse_transformations(Some("{not json")),
            Err(Error::InvalidTransformations)
        ));
    }

    #[tokio::test]
    async fn serves_a_transformed_link() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/image-transformation",
            Form::new()
                .file("file", "image/png", testing::image(2 * MB))
                .text("transformations", r#"[{"effect":"grayscale"}]"#),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["publicId"], "image-transformation-uploads/asset-1");
        assert_eq!(
            body["transformedUrl"],
            "https://res.example.com/demo/image/upload/e_grayscale/image-transformation-uploads/asset-1"
        );
        assert_ne!(body["transformedUrl"], body["originalUrl"]);

        let uploads = storage.uploads();
        assert_eq!(uploads.len(), 1);
        assert!(uploads[0].1.params().get("transformation").is_none());
    }

    #[tokio::test]
    async fn rejects_oversized_images_without_uploading() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/image-transformation",
            Form::new()
                .file("file", "image/jpeg", testing::image(6 * MB))
                .text("transformations", r#"[{"effect":"grayscale"}]"#),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "File size too large. Max allowed size is 5MB.");
        assert!(storage.uploads().is_empty());
    }

    #[tokio::test]
    async fn rejects_bad_descriptors_without_uploading() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        for transformations in ["[{\"effect\":", r#"[{"explode":"yes"}]"#, r#"{"effect":"sepia"}"#] {
            let (status, body) = testing::post(
                ctx.clone(),
                "/api/image-transformation",
                Form::new()
                    .file("file", "image/png", testing::image(100))
                    .text("transformations", transformations),
                Some(testing::bearer()),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Invalid transformations");
        }

        assert!(storage.uploads().is_empty());
    }

    #[tokio::test]
    async fn rejects_unsupported_types() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/image-transformation",
            Form::new().file("file", "image/gif", testing::image(100)),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid file format. Please upload an image.");
        assert!(storage.uploads().is_empty());
    }
}
