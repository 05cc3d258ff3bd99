use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::UploadOptions,
        upload::{policy, relay, FilePayload},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(
        ctx,
        &policy::IMAGE_UPLOAD,
        payload.file,
        UploadOptions::new("social-media-images"),
    )
    .await?;

    tracing::info!(
        "Uploaded {} for {}",
        relayed.media.public_id,
        auth.user_id
    );

    Ok(response::Success::ImageUploaded {
        public_id: relayed.media.public_id,
        url: relayed.media.secure_url,
    })
}
