use thiserror::Error;

#[derive(Error, Debug)]
pub enum RavelryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Collection '{key}' is missing from the pattern data")]
    MissingCollectionError { key: String },

    #[error("Pattern has no identifier to fetch")]
    MissingIdentifierError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Parse,
    Data,
    Configuration,
}

impl RavelryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RavelryError::ApiError(_) | RavelryError::HttpStatusError { .. } => {
                ErrorCategory::Transport
            }
            RavelryError::ParseError(_) => ErrorCategory::Parse,
            RavelryError::MissingCollectionError { .. } | RavelryError::MissingIdentifierError => {
                ErrorCategory::Data
            }
            RavelryError::IoError(_)
            | RavelryError::MissingConfigError { .. }
            | RavelryError::InvalidConfigValueError { .. }
            | RavelryError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// HTTP status of a failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RavelryError::HttpStatusError { status, .. } => Some(*status),
            RavelryError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RavelryError::HttpStatusError { status: 401, .. }
            | RavelryError::HttpStatusError { status: 403, .. } => {
                "Ravelry rejected the credentials".to_string()
            }
            RavelryError::HttpStatusError { status: 404, .. } => {
                "The pattern could not be found".to_string()
            }
            RavelryError::HttpStatusError { status, .. } => {
                format!("Ravelry answered with HTTP {}", status)
            }
            RavelryError::ApiError(_) => "Could not reach the Ravelry API".to_string(),
            RavelryError::ParseError(_) => "Ravelry returned data that is not valid JSON".to_string(),
            RavelryError::MissingCollectionError { key } => {
                format!("The pattern has no '{}' list", key)
            }
            RavelryError::MissingIdentifierError => "No pattern id was given".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RavelryError::HttpStatusError { status: 401, .. }
            | RavelryError::HttpStatusError { status: 403, .. } => {
                "Check RAV_ACCESS and RAV_PERSONAL"
            }
            RavelryError::HttpStatusError { status: 404, .. } => "Check the pattern id or permalink",
            RavelryError::HttpStatusError { .. } | RavelryError::ApiError(_) => {
                "Check the network connection and RAV_API_BASE, then try again"
            }
            RavelryError::ParseError(_) => "Check that RAV_API_BASE points at the Ravelry API",
            RavelryError::MissingCollectionError { .. } => {
                "Check pack_count() or packs_raw() before building packs"
            }
            RavelryError::MissingIdentifierError => "Create the pattern with Pattern::with_id",
            RavelryError::IoError(_) => "Check that the configuration file exists and is readable",
            RavelryError::MissingConfigError { .. }
            | RavelryError::InvalidConfigValueError { .. }
            | RavelryError::ConfigValidationError { .. } => "Fix the configuration and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, RavelryError>;
