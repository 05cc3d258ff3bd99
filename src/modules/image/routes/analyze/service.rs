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
    UploadOptions::new("ai-content-analysis")
        .categorization("google_tagging")
        .auto_tagging(0.7)
        .colors(true)
        .moderation("aws_rek")
}

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(ctx, &policy::IMAGE, payload.file, options()).await?;

    tracing::info!(
        "Analyzed {} for {}",
        relayed.media.public_id,
        auth.user_id
    );

    Ok(response::Success::Analyzed(relayed.media.raw))
}
