use super::{Error, ResourceType, UploadedMedia, Uploader};
use crate::types::StorageConfig;
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Signed uploads against the Cloudinary upload API.
pub struct CloudinaryUploader {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    api_base: String,
}

impl CloudinaryUploader {
    pub fn new(cfg: &StorageConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(cfg.upload_timeout).build()?;

        Ok(Self {
            client,
            cloud_name: cfg.cloud_name.clone(),
            api_key: cfg.api_key.clone(),
            api_secret: cfg.api_secret.clone(),
            api_base: cfg.api_base.clone(),
        })
    }

    fn endpoint(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/{}/{}/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name,
            resource_type
        )
    }
}

/// Cloudinary signature: the signed parameters sorted by name, joined as a
/// query string, suffixed with the API secret and hashed.
pub(super) fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut params = params.to_vec();
    params.sort_by(|a, b| a.0.cmp(b.0));

    let data_to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(format!("{}{}", data_to_sign, api_secret));
    let hash = hasher.finalize();
    base16ct::lower::encode_string(&hash)
}

#[async_trait]
impl Uploader for CloudinaryUploader {
    async fn upload(
        &self,
        path: &Path,
        resource_type: ResourceType,
    ) -> Result<UploadedMedia, Error> {
        let contents = tokio::fs::read(path).await.map_err(|err| {
            tracing::error!("Failed to read {}: {:?}", path.display(), err);
            Error::ReadFailed(err)
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let part = Part::bytes(contents).file_name(file_name);

        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign(&[("timestamp", timestamp.to_string())], &self.api_secret);

        let form = Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", part);

        let res = self
            .client
            .post(self.endpoint(resource_type))
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to upload a file: {:?}", err);
                Error::RequestFailed(err)
            })?;

        let status = res.status();
        let data = res.text().await.map_err(|err| {
            tracing::error!("Error occurred while processing return data: {:?}", err);
            Error::RequestFailed(err)
        })?;

        if status != StatusCode::OK {
            tracing::error!("Failed to upload file: {}", data);
            let message = match serde_json::from_str::<ErrorResponse>(&data) {
                Ok(body) => body.error.message,
                Err(_) => data,
            };
            return Err(Error::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<UploadResponse>(&data) {
            Ok(res) => Ok(UploadedMedia {
                url: res.secure_url,
                public_id: res.public_id,
            }),
            Err(err) => {
                tracing::error!("Failed to deserialize cloudinary response: {:?}", err);
                Err(Error::InvalidResponse(err))
            }
        }
    }
}
