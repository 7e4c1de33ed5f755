use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModupError {
    #[error("Module report unavailable: {0}")]
    ReportUnavailable(String),

    #[error("Malformed module record: {0}")]
    MalformedRecord(String),

    #[error("Upgrade failed: {0}")]
    UpgradeFailed(String),

    #[error("Selection matched no offered update: {0}")]
    SelectionMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ModupError {
    fn from(err: serde_json::Error) -> Self {
        ModupError::MalformedRecord(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModupError>;
