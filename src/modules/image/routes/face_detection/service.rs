use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{ResourceType, Step, Transformation, UploadOptions},
        upload::{policy, relay, Error, FilePayload},
    },
    types::Context,
};
use std::sync::Arc;

pub fn thumbnail() -> Transformation {
    Transformation::new().then(
        Step::new()
            .crop("thumb")
            .gravity("face")
            .width(300)
            .height(300),
    )
}

pub async fn service(ctx: Arc<Context>, auth: Auth, payload: FilePayload) -> response::Response {
    let relayed = relay::relay(
        ctx.clone(),
        &policy::IMAGE,
        payload.file,
        UploadOptions::new("face-detection"),
    )
    .await?;

    let faces = ctx
        .storage
        .count_faces(&relayed.media.public_id)
        .await
        .map_err(|err| relay::upstream_error(&ctx, err))?;

    if faces == 0 {
        tracing::info!("No faces found on {}", relayed.media.public_id);
        return Err(Error::NoFaceDetected);
    }

    tracing::info!(
        "Found {} face(s) on {} for {}",
        faces,
        relayed.media.public_id,
        auth.user_id
    );

    Ok(response::Success::Cropped {
        transformed_url: ctx.storage.url(
            &relayed.media.public_id,
            ResourceType::Image,
            &thumbnail(),
        ),
        original_url: relayed.media.secure_url,
    })
}
