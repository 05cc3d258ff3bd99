use super::service;
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidSession,
}

fn get_token_from_header(header: &str) -> Result<&str, Error> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(Error::InvalidSession)
}

fn get_identity_from_header(ctx: &Context, header: &str) -> Result<service::auth::Identity, Error> {
    let token = get_token_from_header(header)?;
    service::auth::verify_access_token(&ctx.auth, token, chrono::Utc::now().timestamp()).map_err(
        |err| {
            tracing::warn!("Rejected session token: {:?}", err);
            Error::InvalidSession
        },
    )
}

/// The signed-in caller. Every feature endpoint takes one, so a request without a
/// valid session is turned away before its body is read.
#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Context missing from request extensions: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        let err = (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(err.clone().into_response())?;

        get_identity_from_header(&ctx, auth_header)
            .map(|identity| Self {
                user_id: identity.user_id,
            })
            .map_err(|_| err.into_response())
    }
}
