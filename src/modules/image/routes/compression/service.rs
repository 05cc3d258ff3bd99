use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{Step, Transformation, UploadOptions},
        upload::{policy, relay, Error, FilePayload},
    },
    types::Context,
};
use std::sync::Arc;

pub fn options() -> UploadOptions {
    UploadOptions::new("compressed-images").transformation(
        &Transformation::new().then(
            Step::new()
                .quality("auto:low")
                .fetch_format("auto")
                .width(800),
        ),
    )
}

/// Share of the original size saved by compression, floored at zero.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - compressed_size as f64 / original_size as f64).max(0.0)
}

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(ctx, &policy::IMAGE, payload.file, options()).await?;

    let compressed_size = match relayed.media.bytes {
        Some(bytes) if bytes > 0 => bytes,
        _ => {
            tracing::error!(
                "Media service reported no size for {}",
                relayed.media.public_id
            );
            return Err(Error::UpstreamUploadFailed(String::from(
                "Compression failed",
            )));
        }
    };

    tracing::info!(
        "Compressed {} for {}: {} -> {} bytes",
        relayed.media.public_id,
        auth.user_id,
        relayed.original_size,
        compressed_size
    );

    Ok(response::Success::Compressed {
        original_url: relayed.media.secure_url.clone(),
        compressed_url: relayed.media.secure_url,
        original_size: relayed.original_size,
        compressed_size,
        compression_ratio: compression_ratio(relayed.original_size, compressed_size),
    })
}
