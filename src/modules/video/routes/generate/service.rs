use super::types::{request, response};
use crate::{
    types::Context,
    utils::{
        artifact::TemporaryArtifact,
        storage::{self, ResourceType},
    },
};
use std::sync::Arc;
use ulid::Ulid;
use validator::Validate;

fn placeholder(prompt: &str, max_iterations: i32) -> String {
    format!(
        "Video de prueba para: {} (iteraciones: {})",
        prompt, max_iterations
    )
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request_id = Ulid::new();
    tracing::info!(
        %request_id,
        prompt = %payload.prompt,
        max_iterations = payload.max_iterations,
        "Received video generation request"
    );

    let artifact = TemporaryArtifact::create(
        &ctx.artifact.directory,
        &request_id,
        &placeholder(&payload.prompt, payload.max_iterations),
    )
    .await
    .map_err(|err| {
        tracing::error!(%request_id, "Failed to write artifact: {:?}", err);
        response::Error::FailedToWriteArtifact(err.to_string())
    })?;

    let timeout = ctx.storage.upload_timeout;
    let media = tokio::time::timeout(
        timeout,
        ctx.storage
            .uploader
            .upload(artifact.path(), ResourceType::Video),
    )
    .await
    .unwrap_or(Err(storage::Error::TimedOut(timeout)))
    .map_err(|err| {
        tracing::error!(%request_id, "Failed to upload artifact: {}", err);
        response::Error::FailedToUpload(err.to_string())
    })?;

    artifact.close().await.map_err(|err| {
        tracing::error!(%request_id, "Failed to release artifact: {:?}", err);
        response::Error::FailedToReleaseArtifact(err.to_string())
    })?;

    tracing::info!(
        %request_id,
        public_id = %media.public_id,
        "Uploaded video to {}",
        media.url
    );

    Ok(response::Success::VideoGenerated(media))
}
