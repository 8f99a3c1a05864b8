use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cloudflare API failure: {0}")]
    ApiFailure(String),

    #[error("delete of {id} returned status {status}: {body}")]
    DeleteFailed { id: String, status: u16, body: String },

    #[error("Invalid API response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PagesError>;
