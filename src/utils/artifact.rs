use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use ulid::Ulid;

/// A placeholder file owned by a single request.
///
/// The file is removed when the artifact is closed or, failing that, when it
/// is dropped, so every exit path of the owning request releases it.
#[derive(Debug)]
pub struct TemporaryArtifact {
    path: PathBuf,
    released: bool,
}

impl TemporaryArtifact {
    pub fn file_name(id: &Ulid) -> String {
        format!("video_generado_{}.mp4", id)
    }

    pub async fn create(directory: &Path, id: &Ulid, contents: &str) -> io::Result<Self> {
        tokio::fs::create_dir_all(directory).await?;

        let path = directory.join(Self::file_name(id));
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let artifact = Self {
            path,
            released: false,
        };

        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Created artifact {}", artifact.path.display());

        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn close(mut self) -> io::Result<()> {
        self.released = true;
        tokio::fs::remove_file(&self.path).await?;
        tracing::debug!("Released artifact {}", self.path.display());
        Ok(())
    }
}

impl Drop for TemporaryArtifact {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(_) => tracing::debug!("Released artifact {}", self.path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!("Failed to release artifact {}: {}", self.path.display(), err)
            }
        }
    }
}
