use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SoilError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid data format: {field} has value '{value}'")]
    InvalidDataFormat { field: String, value: String },

    #[error("CSV file is empty")]
    EmptyInput,

    #[error("Error parsing CSV file: {0}")]
    Csv(String),

    #[error("failed to load thresholds from {path}: {reason}")]
    ThresholdsLoad { path: PathBuf, reason: String },

    #[error("invalid threshold table: {0}")]
    ThresholdsInvalid(String),

    #[error("no knowledge base article with id {0}")]
    UnknownArticle(u32),

    #[error("no ticket with id '{0}'")]
    UnknownTicket(String),

    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("no soil data loaded. Upload a CSV file first")]
    NoSoilData,

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for SoilError {
    fn from(e: csv::Error) -> Self {
        SoilError::Csv(e.to_string())
    }
}
