use crate::utils::storage::{CloudinaryUploader, Uploader};
use async_trait::async_trait;
use std::{env, path::PathBuf, sync::Arc, time::Duration};

const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("Failed to prepare artifact directory: {0}")]
    ArtifactDirectory(#[from] std::io::Error),
    #[error("Failed to build upload client: {0}")]
    UploadClient(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development => "debug",
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone)]
pub struct StorageContext {
    pub uploader: Arc<dyn Uploader>,
    pub upload_timeout: Duration,
}

#[derive(Clone)]
pub struct ArtifactContext {
    pub directory: PathBuf,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
    pub artifact: ArtifactContext,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
    pub upload_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ArtifactConfig {
    pub directory: PathBuf,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub artifact: ArtifactConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = var("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8000,
        };

        let cloud_name = required("CLOUDINARY_CLOUD_NAME")?;
        let api_key = required("CLOUDINARY_API_KEY")?;
        let api_secret = required("CLOUDINARY_API_SECRET")?;
        let api_base =
            var("CLOUDINARY_API_BASE").unwrap_or_else(|| DEFAULT_CLOUDINARY_API_BASE.to_string());
        let upload_timeout = match var("UPLOAD_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "UPLOAD_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
        };

        let artifact_directory = var("ARTIFACT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("creator-tube"));

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            storage: StorageConfig {
                cloud_name,
                api_key,
                api_secret,
                api_base,
                upload_timeout,
            },
            artifact: ArtifactConfig {
                directory: artifact_directory,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ConfigError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ConfigError> {
        tokio::fs::create_dir_all(&self.artifact.directory).await?;

        let uploader = CloudinaryUploader::new(&self.storage)?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            storage: StorageContext {
                uploader: Arc::new(uploader),
                upload_timeout: self.storage.upload_timeout,
            },
            artifact: ArtifactContext {
                directory: self.artifact.directory,
            },
        })
    }
}
