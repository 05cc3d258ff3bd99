use super::service::service;
use crate::{
    modules::{
        auth::middleware::Auth,
        upload::{FilePayload, Multipart},
    },
    types::Context,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    form: Multipart<FilePayload>,
) -> impl IntoResponse {
    service(ctx, auth, form.data).await
}
