use super::{
    policy::{FileDescriptor, Policy, Rejection},
    Error, FileField,
};
use crate::{
    modules::storage::{self, UploadOptions, UploadedMedia},
    types::{AppEnvironment, Context},
};
use bytes::Bytes;
use std::sync::Arc;

pub struct Relayed {
    pub original_size: u64,
    pub media: UploadedMedia,
}

/// Checks an uploaded file against `policy` and reads it into memory.
pub async fn accept(policy: &Policy, file: Option<FileField>) -> Result<Bytes, Error> {
    let file = match file {
        Some(file) => file,
        None => {
            tracing::warn!("Rejected {} upload: no file", policy.name);
            return Err(Rejection::Missing.into());
        }
    };

    let path = file.contents.path();
    let size = tokio::fs::metadata(path)
        .await
        .map_err(|err| {
            tracing::error!("Failed to inspect the uploaded file: {:?}", err);
            Error::UnreadableFile
        })?
        .len();

    policy
        .validate(Some(FileDescriptor {
            content_type: file.metadata.content_type.as_deref(),
            size,
        }))
        .map_err(|rejection| {
            tracing::warn!("Rejected {} upload: {}", policy.name, rejection);
            rejection
        })?;

    tokio::fs::read(path).await.map(Bytes::from).map_err(|err| {
        tracing::error!("Failed to read the uploaded file: {:?}", err);
        Error::UnreadableFile
    })
}

pub fn upstream_error(ctx: &Context, err: storage::Error) -> Error {
    tracing::error!("Media service call failed: {}", err);

    match err {
        storage::Error::Timeout => Error::UpstreamTimeout,
        err => match ctx.app.environment {
            AppEnvironment::Production => Error::UpstreamUploadFailed(String::from("Upload failed")),
            AppEnvironment::Development => Error::UpstreamUploadFailed(err.to_string()),
        },
    }
}

/// Hands accepted bytes to the media service. One call, no retry.
pub async fn send(
    ctx: Arc<Context>,
    contents: Bytes,
    options: UploadOptions,
) -> Result<Relayed, Error> {
    let original_size = contents.len() as u64;

    let media = ctx
        .storage
        .upload(contents, options)
        .await
        .map_err(|err| upstream_error(&ctx, err))?;

    if media.public_id.is_empty() {
        tracing::error!("Media service returned no asset id: {}", media.raw);
        return Err(Error::UpstreamUploadFailed(String::from("Upload failed")));
    }

    tracing::info!(
        "Stored {} ({} bytes) in {}",
        media.public_id,
        original_size,
        media.secure_url
    );

    Ok(Relayed {
        original_size,
        media,
    })
}

pub async fn relay(
    ctx: Arc<Context>,
    policy: &Policy,
    file: Option<FileField>,
    options: UploadOptions,
) -> Result<Relayed, Error> {
    let contents = accept(policy, file).await?;
    send(ctx, contents, options).await
}
