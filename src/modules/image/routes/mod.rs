mod analyze;
mod auto_tagging;
mod background_removal;
mod color_enhancement;
mod compression;
mod face_detection;
mod transformation;
mod upload;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(auto_tagging::get_router())
        .merge(background_removal::get_router())
        .merge(color_enhancement::get_router())
        .merge(analyze::get_router())
        .merge(compression::get_router())
        .merge(transformation::get_router())
        .merge(face_detection::get_router())
        .merge(upload::get_router())
}
