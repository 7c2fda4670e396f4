use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    payload: Result<Json<request::Payload>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(payload)) => service(ctx, payload).await,
        Err(rejection) => {
            tracing::warn!("Rejected video generation body: {}", rejection.body_text());
            Err(response::Error::InvalidBody(rejection.body_text()))
        }
    }
}
