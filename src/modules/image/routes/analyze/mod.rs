mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/image-analyze", post(handler::handler))
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{self, FakeMediaService, Form};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn relays_the_whole_analysis() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/image-analyze",
            Form::new().file("file", "image/webp", testing::image(4096)),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["public_id"], "ai-content-analysis/asset-1");
        assert_eq!(body["moderation"][0]["status"], "approved");

        let params = storage.uploads()[0].1.params().clone();
        assert_eq!(params["categorization"], "google_tagging");
        assert_eq!(params["auto_tagging"], "0.7");
        assert_eq!(params["colors"], "true");
        assert_eq!(params["moderation"], "aws_rek");
    }

    #[tokio::test]
    async fn is_gated_like_every_other_feature() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, _) = testing::post(
            ctx,
            "/api/image-analyze",
            Form::new().file("file", "image/webp", testing::image(4096)),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(storage.uploads().is_empty());
    }
}
