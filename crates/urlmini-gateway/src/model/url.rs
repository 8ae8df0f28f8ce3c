use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MinifyRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub use_secure: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MinifyResponse {
    pub mini_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpandQuery {
    #[serde(default)]
    pub mini_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandResponse {
    pub original_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
