use super::service::service;
use super::types::request;
use crate::{
    modules::{auth::middleware::Auth, upload::Multipart},
    types::Context,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    form: Multipart<request::Payload>,
) -> impl IntoResponse {
    service(ctx, auth, form.data).await
}
