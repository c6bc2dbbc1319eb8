use thiserror::Error;

#[derive(Debug, Error)]
pub enum GembrushError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("authentication rejected ({status}): {body}")]
    Authentication {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("quota exhausted ({status}): {body}")]
    QuotaExhausted {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("api error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("service returned no usable image or text parts")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, GembrushError>;
