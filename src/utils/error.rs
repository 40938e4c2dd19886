use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// 上游回傳非 2xx，原樣保留狀態碼與內容
    #[error("API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Query encoding error: {message}")]
    QueryError { message: String },
}

impl MergeError {
    /// 若為上游 HTTP 錯誤則回傳狀態碼
    pub fn status(&self) -> Option<u16> {
        match self {
            MergeError::ApiError { status, .. } => Some(*status),
            MergeError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
