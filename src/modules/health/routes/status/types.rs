pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub const LIVENESS_MESSAGE: &str = "Hello from Render FastAPI!";

    pub enum Success {
        Alive,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Alive => (
                    StatusCode::OK,
                    Json(json!({ "message": LIVENESS_MESSAGE })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {}

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {}
        }
    }

    pub type Response = Result<Success, Error>;
}
