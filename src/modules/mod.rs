pub mod health;
pub mod video;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(health::routes::get_router())
        .merge(video::routes::get_router())
}
