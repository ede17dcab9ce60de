use serde::{Deserialize, Serialize};

/// Outbound payload. `url` is the trimmed user input exactly as typed;
/// no protocol prefixing or other normalization is applied before sending.
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Expected success payload from the shortening service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}
