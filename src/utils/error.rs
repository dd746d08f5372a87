use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid date range: low year {low} is after high year {high}")]
    InvalidRangeOrder { low: i32, high: i32 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned an unexpected payload: {message}")]
    ApiPayloadError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Request file parse error: {0}")]
    RequestFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SearchError>;
