use super::types::{request, response};
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{Step, Transformation, UploadOptions},
        upload::{policy, relay, FilePayload},
    },
    types::Context,
};
use std::sync::Arc;

pub fn options(version: request::Version) -> UploadOptions {
    let (saturation, vibrance) = match version {
        request::Version::V1 => (60, 70),
        request::Version::V2 => (80, 90),
    };

    let transformation = Transformation::new()
        .then(Step::new().effect("auto_color"))
        .then(Step::new().effect("auto_contrast:50"))
        .then(Step::new().effect("auto_brightness:40"))
        .then(Step::new().effect(&format!("saturation:{}", saturation)))
        .then(Step::new().effect(&format!("vibrance:{}", vibrance)));

    let options = UploadOptions::new("color-enhancement").transformation(&transformation);

    match version {
        request::Version::V1 => options,
        request::Version::V2 => options.format("jpg"),
    }
}

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    query: request::Query,
    payload: FilePayload,
) -> response::Response {
    let version = query.version();
    let relayed = relay::relay(ctx, &policy::IMAGE, payload.file, options(version)).await?;

    tracing::info!(
        "Enhanced colors of {} ({:?}) for {}",
        relayed.media.public_id,
        version,
        auth.user_id
    );

    // the enhancement is applied while storing, so both links serve the stored asset
    Ok(response::Success::Enhanced {
        original_url: relayed.media.secure_url.clone(),
        transformed_url: relayed.media.secure_url,
    })
}
