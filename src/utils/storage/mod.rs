mod cloudinary;

pub use cloudinary::CloudinaryUploader;

use async_trait::async_trait;
use std::{fmt, path::Path, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read artifact: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("Upload request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Upload rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid upload response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Upload timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceType {
    Video,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
}

/// A media host that accepts a local file and hands back a public URL.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, path: &Path, resource_type: ResourceType)
        -> Result<UploadedMedia, Error>;
}
