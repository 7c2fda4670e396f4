use crate::{
    types::{AppContext, AppEnvironment, ArtifactContext, Context, StorageContext},
    utils::storage::{Error, ResourceType, UploadedMedia, Uploader},
};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

#[derive(Clone, Debug)]
pub struct RecordedUpload {
    pub path: PathBuf,
    pub resource_type: ResourceType,
    pub contents: String,
}

enum Behaviour {
    Succeed,
    Fail(String),
    Stall,
    Discard,
}

/// Records what it was asked to upload and answers with a canned outcome.
pub struct FakeUploader {
    behaviour: Behaviour,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl FakeUploader {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            uploads: Mutex::new(vec![]),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Behaviour::Succeed)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Behaviour::Fail(message.to_string()))
    }

    pub fn stalling() -> Self {
        Self::new(Behaviour::Stall)
    }

    /// Removes the uploaded file itself before reporting success.
    pub fn discarding() -> Self {
        Self::new(Behaviour::Discard)
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Uploader for FakeUploader {
    async fn upload(
        &self,
        path: &Path,
        resource_type: ResourceType,
    ) -> Result<UploadedMedia, Error> {
        let contents = tokio::fs::read_to_string(path).await?;
        self.uploads.lock().unwrap().push(RecordedUpload {
            path: path.to_path_buf(),
            resource_type,
            contents,
        });

        match &self.behaviour {
            Behaviour::Succeed | Behaviour::Discard => {
                if matches!(self.behaviour, Behaviour::Discard) {
                    tokio::fs::remove_file(path).await?;
                }

                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok(UploadedMedia {
                    public_id: file_name.clone(),
                    url: format!(
                        "https://res.cloudinary.com/demo/video/upload/v1/{}",
                        file_name
                    ),
                })
            }
            Behaviour::Fail(message) => Err(Error::Rejected {
                status: 503,
                message: message.clone(),
            }),
            Behaviour::Stall => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(Error::Rejected {
                    status: 504,
                    message: "stalled".to_string(),
                })
            }
        }
    }
}

pub fn context(directory: &Path, uploader: Arc<dyn Uploader>) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 0,
        },
        storage: StorageContext {
            uploader,
            upload_timeout: Duration::from_secs(5),
        },
        artifact: ArtifactContext {
            directory: directory.to_path_buf(),
        },
    })
}

pub fn remaining_files(directory: &Path) -> usize {
    match std::fs::read_dir(directory) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
