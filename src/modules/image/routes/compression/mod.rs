mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/image-compression", post(handler::handler))
}

#[cfg(test)]
mod tests {
    use super::service::{compression_ratio, options};
    use crate::utils::testing::{self, FakeMediaService, Form};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[test]
    fn ratio_is_the_share_saved() {
        assert_eq!(compression_ratio(1000, 250), 0.75);
        assert_eq!(compression_ratio(1000, 1000), 0.0);
        assert_eq!(compression_ratio(1000, 1500), 0.0);
        assert_eq!(compression_ratio(0, 10), 0.0);

        for (original, compressed) in [(1, 1), (10, 1), (5_000_000, 1), (4096, 4095)] {
            let ratio = compression_ratio(original, compressed);
            assert!((0.0..1.0).contains(&ratio), "{} {}", original, compressed);
        }
    }

    #[test]
    fn caps_width_and_lowers_quality() {
        assert_eq!(options().params()["transformation"], "f_auto,q_auto:low,w_800");
        assert_eq!(options().folder(), "compressed-images");
    }

    #[tokio::test]
    async fn reports_sizes_from_the_relay() {
        let storage = Arc::new(FakeMediaService::default());
        let ctx = testing::context(storage.clone());

        let (status, body) = testing::post(
            ctx,
            "/api/image-compression",
            Form::new().file("file", "image/png", testing::image(4000)),
            Some(testing::bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["originalSize"], 4000);
        assert_eq!(body["compressedSize"], 2000);
        assert_eq!(body["compressionRatio"], 0.5);
        assert!(body["compressedUrl"].is_string());

        let ratio = body["compressionRatio"].as_f64().unwrap();
        let expected = 1.0
            - body["compressedSize"].as_f64().unwrap() / body["originalSize"].as_f64().unwrap();
        assert_eq!(ratio, expected);
    }
}
