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

pub fn options() -> UploadOptions {
    UploadOptions::new("auto-tagging")
        .categorization("aws_rek_tagging")
        .auto_tagging(0.6)
}

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(ctx, &policy::IMAGE, payload.file, options()).await?;

    tracing::info!(
        "Tagged {} for {}: {:?}",
        relayed.media.public_id,
        auth.user_id,
        relayed.media.tags
    );

    Ok(response::Success::Tagged {
        image_url: relayed.media.secure_url,
        tags: relayed.media.tags,
    })
}
