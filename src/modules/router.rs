use super::{image, upload::policy, video};
use crate::types::Context;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the media relay API" })),
    )
}

async fn policies() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "policies": policy::ALL })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .route("/policies", get(policies))
        .merge(image::routes::get_router())
        .merge(video::routes::get_router())
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{self, FakeMediaService};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn health_check_is_public() {
        let ctx = testing::context(Arc::new(FakeMediaService::default()));
        let (status, body) = testing::get(ctx, "/api").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn publishes_upload_policies() {
        let ctx = testing::context(Arc::new(FakeMediaService::default()));
        let (status, body) = testing::get(ctx, "/api/policies").await;

        assert_eq!(status, StatusCode::OK);
        let policies = body["policies"].as_array().unwrap();
        assert_eq!(policies.len(), 3);
        assert_eq!(policies[0]["name"], "image");
        assert_eq!(policies[0]["maxSize"], 5 * 1024 * 1024);
        assert_eq!(policies[2]["allowedTypes"][0], "video/mp4");
    }
}
