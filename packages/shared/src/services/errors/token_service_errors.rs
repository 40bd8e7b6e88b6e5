use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenServiceError {
    MissingCredentials,
    SigningError(String),
}

impl fmt::Display for TokenServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenServiceError::MissingCredentials => {
                write!(f, "LiveKit API key or secret is not configured")
            }
            TokenServiceError::SigningError(msg) => write!(f, "Signing error: {}", msg),
        }
    }
}

impl std::error::Error for TokenServiceError {}
