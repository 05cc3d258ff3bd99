use super::service::service;
use super::types::request;
use crate::{
    modules::{
        auth::middleware::Auth,
        upload::{FilePayload, Multipart},
    },
    types::Context,
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    Query(query): Query<request::Query>,
    form: Multipart<FilePayload>,
) -> impl IntoResponse {
    service(ctx, auth, query, form.data).await
}
