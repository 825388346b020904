use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),
    #[error("Post {post_id} references missing user {user_id}")]
    MissingAuthor { post_id: u64, user_id: u64 },
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
}
