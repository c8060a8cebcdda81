use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("please choose a PDF file ({0})")]
    Validation(String),

    #[error("server error: {status_code}")]
    Server { status_code: u16 },

    #[error("{0}")]
    Application(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for UploadError {
    fn from(e: reqwest::Error) -> Self {
        UploadError::Transport(e.to_string())
    }
}
