pub mod request {
    use serde::{Deserialize, Deserializer};
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    pub const DEFAULT_MAX_ITERATIONS: i32 = 3;

    fn default_max_iterations() -> i32 {
        DEFAULT_MAX_ITERATIONS
    }

    fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
        match prompt.trim().is_empty() {
            true => Err(ValidationError::new("MISSING_PROMPT")
                .with_message(Cow::from("prompt is required"))),
            false => Ok(()),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default, deserialize_with = "null_as_empty")]
        #[validate(custom(function = "validate_prompt"))]
        pub prompt: String,
        #[serde(rename = "maxIterations", default = "default_max_iterations")]
        #[validate(range(
            min = 1,
            code = "INVALID_MAX_ITERATIONS",
            message = "maxIterations must be at least 1"
        ))]
        pub max_iterations: i32,
    }
}

pub mod response {
    use crate::utils::{storage::UploadedMedia, validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        VideoGenerated(UploadedMedia),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::VideoGenerated(media) => {
                    (StatusCode::OK, Json(json!({ "videoUrl": media.url }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidBody(String),
        FailedToValidate(ValidationErrors),
        FailedToWriteArtifact(String),
        FailedToUpload(String),
        FailedToReleaseArtifact(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(detail) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
                }
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToWriteArtifact(detail) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": format!("Failed to write artifact: {}", detail) })),
                )
                    .into_response(),
                Self::FailedToUpload(detail) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": detail })),
                )
                    .into_response(),
                Self::FailedToReleaseArtifact(detail) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": format!("Failed to release artifact: {}", detail) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
