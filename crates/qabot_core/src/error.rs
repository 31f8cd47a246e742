use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("response has no answer field")]
    MissingAnswer,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
