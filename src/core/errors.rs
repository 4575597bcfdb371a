use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerdantError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("VerdantError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for VerdantError {
    fn from(error: std::io::Error) -> Self {
        VerdantError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for VerdantError {
    fn from(error: reqwest::Error) -> Self {
        VerdantError::Reqwest(Box::new(error))
    }
}
