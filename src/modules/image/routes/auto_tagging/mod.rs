mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/auto-tagging", post(handler::handler))
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{self, FakeMediaService, Form, MB};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn returns_detected_tags() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/auto-tagging",
            Form::new().file("file", "image/jpeg", testing::image(MB)),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"][0], "person");
        assert!(body["imageUrl"]
            .as_str()
            .unwrap()
            .ends_with("/auto-tagging/asset-1"));

        let uploads = storage.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, MB);
        assert_eq!(uploads[0].1, super::service::options());
        assert_eq!(uploads[0].1.params()["categorization"], "aws_rek_tagging");
        assert_eq!(uploads[0].1.params()["auto_tagging"], "0.6");
    }

    #[tokio::test]
    async fn requires_a_session() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx.clone(),
            "/api/auto-tagging",
            Form::new().file("file", "image/jpeg", testing::image(10)),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");

        let (status, _) = testing::post(
            ctx,
            "/api/auto-tagging",
            Form::new().file("file", "image/jpeg", testing::image(10)),
            Some(String::from("Bearer user_2test.9999999999.deadbeef")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        assert!(storage.uploads().is_empty());
    }

    #[tokio::test]
    async fn reports_a_missing_file() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/auto-tagging",
            Form::new().text("note", "no file here"),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file provided");
        assert!(storage.uploads().is_empty());
    }

    #[tokio::test]
    async fn answers_non_form_bodies_with_json() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post_raw(
            ctx.clone(),
            "/api/auto-tagging",
            "application/json",
            br#"{"file":"nope"}"#.to_vec(),
            Some(testing::bearer()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = testing::post_raw(
            ctx,
            "/api/auto-tagging",
            "multipart/form-data; boundary=cut-short",
            b"--cut-short\r\nContent-Disposition: form-data; name=\"file\"".to_vec(),
            Some(testing::bearer()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        assert!(storage.uploads().is_empty());
    }
}
