use super::types::response;

pub async fn service() -> response::Response {
    Ok(response::Success::Alive)
}
