/// Error types for the Machine Translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Provider configuration problem (missing or empty API key)
    ConfigError(String),
    /// Network-level failure talking to the provider
    NetworkError(String),
    /// The provider answered but the translation was unusable
    TranslationError(String),
    /// Language code failed validation
    InvalidLanguage(String),
    /// Every retry attempt failed and the request was abandoned
    ProviderExhausted { attempts: u32, last: Box<MtError> },
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::InvalidLanguage(msg) => write!(f, "Invalid language code: {}", msg),
            MtError::ProviderExhausted { attempts, last } => {
                write!(f, "Provider exhausted after {} attempts: {}", attempts, last)
            }
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
