use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{Step, Transformation, UploadOptions},
        upload::{policy, relay, FilePayload},
    },
    types::Context,
};
use std::sync::Arc;

pub fn options() -> UploadOptions {
    // png keeps the transparency left behind by the removed background
    UploadOptions::new("background-removal-uploads")
        .transformation(
            &Transformation::new().then(Step::new().effect("background_removal:cloudinary_ai")),
        )
        .format("png")
}

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(ctx, &policy::IMAGE, payload.file, options()).await?;

    tracing::info!(
        "Removed background of {} for {}",
        relayed.media.public_id,
        auth.user_id
    );

    Ok(response::Success::BackgroundRemoved {
        public_id: relayed.media.public_id,
        secure_url: relayed.media.secure_url,
    })
}
