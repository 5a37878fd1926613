use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date '{value}' for {field}: {source}")]
    DateError {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unexpected response from {service}: {message}")]
    UnexpectedResponse { service: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PantryError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PantryError::ApiError(_) | PantryError::UnexpectedResponse { .. } => {
                ErrorSeverity::Medium
            }
            PantryError::DateError { .. }
            | PantryError::ConfigError { .. }
            | PantryError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PantryError::IoError(_) | PantryError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PantryError::ApiError(_) | PantryError::UnexpectedResponse { .. } => {
                "Check your network connection and the service endpoint, then try again"
            }
            PantryError::DateError { .. } => "Use dates in YYYY-MM-DD format",
            PantryError::ConfigError { .. } | PantryError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            PantryError::IoError(_) => "Make sure the file exists and is readable",
            PantryError::SerializationError(_) => "The data could not be encoded or decoded",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PantryError::ApiError(_) => "Could not reach the remote service".to_string(),
            PantryError::UnexpectedResponse { service, .. } => {
                format!("{} returned an unexpected response", service)
            }
            PantryError::DateError { field, value, .. } => {
                format!("'{}' is not a valid date for {}", value, field)
            }
            PantryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
