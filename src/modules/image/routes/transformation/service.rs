use super::types::{request, response};
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{ResourceType, Transformation, UploadOptions},
        upload::{policy, relay, Error},
    },
    types::Context,
};
use std::sync::Arc;

pub fn parse_transformations(raw: Option<&str>) -> Result<Transformation, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Transformation::new()),
        Some(raw) => Transformation::from_descriptors(raw).map_err(|err| {
            tracing::warn!("Rejected transformations: {}", err);
            Error::InvalidTransformations
        }),
    }
}

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let contents = relay::accept(&policy::IMAGE, payload.file).await?;
    let transformation = parse_transformations(payload.transformations.as_deref())?;

    let relayed = relay::send(
        ctx.clone(),
        contents,
        UploadOptions::new("image-transformation-uploads"),
    )
    .await?;

    let transformed_url =
        ctx.storage
            .url(&relayed.media.public_id, ResourceType::Image, &transformation);

    tracing::info!(
        "Transformed {} for {} with {}",
        relayed.media.public_id,
        auth.user_id,
        transformation
    );

    Ok(response::Success::Transformed {
        transformed_url,
        public_id: relayed.media.public_id,
        original_url: relayed.media.secure_url,
    })
}
