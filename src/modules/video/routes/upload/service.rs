use super::types::{request, response};
use crate::{
    modules::{
        auth::middleware::Auth,
        storage::{ResourceType, Step, Transformation, UploadOptions, UploadedMedia},
        upload::{
            policy::{self, Rejection},
            relay, Error,
        },
        video::repository::{self, CreateVideoPayload},
    },
    types::Context,
    utils::validation::first_message,
};
use std::sync::Arc;
use validator::Validate;

fn required(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField(field)),
    }
}

pub fn details(payload: &mut request::Payload) -> Result<request::Details, Error> {
    let details = request::Details {
        title: required(payload.title.take(), "Title")?,
        description: required(payload.description.take(), "Description")?,
        original_size: required(payload.original_size.take(), "Original size")?,
    };

    details.validate().map_err(|errors| {
        let message = first_message(&errors, &["title", "description"])
            .unwrap_or_else(|| String::from("Invalid video details"));
        tracing::warn!("Rejected video details: {}", message);
        Error::Rejected(Rejection::FieldTooLong(message))
    })?;

    Ok(details)
}

pub fn options() -> UploadOptions {
    UploadOptions::new("video-uploads")
        .resource_type(ResourceType::Video)
        .transformation(&Transformation::new().then(Step::new().quality("auto").fetch_format("mp4")))
}

pub fn record(details: request::Details, media: UploadedMedia) -> CreateVideoPayload {
    CreateVideoPayload {
        title: details.title,
        description: details.description,
        public_id: media.public_id,
        original_size: details.original_size,
        compressed_size: media.bytes.unwrap_or_default().to_string(),
        duration: media.duration.unwrap_or(0.0),
    }
}

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    mut payload: request::Payload,
) -> response::Response {
    let contents = relay::accept(&policy::VIDEO, payload.file.take()).await?;
    let details = details(&mut payload)?;

    let relayed = relay::send(ctx.clone(), contents, options()).await?;

    let mut conn = ctx.db_conn.pool.acquire().await.map_err(|err| {
        tracing::error!("Failed to acquire a database connection: {}", err);
        Error::PersistenceFailed
    })?;

    let video = repository::create(&mut *conn, record(details, relayed.media))
        .await
        .map_err(|_| Error::PersistenceFailed)?;

    tracing::info!("Saved video {} for {}", video.id, auth.user_id);

    Ok(response::Success::VideoCreated(video))
}
