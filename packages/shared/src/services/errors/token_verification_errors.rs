use std::fmt;

/// Failures of [`JwtTokenSigner::verify`](crate::services::token_service::JwtTokenSigner::verify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerificationError {
    InvalidToken,
    ExpiredToken,
}

impl fmt::Display for TokenVerificationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenVerificationError::InvalidToken => write!(f, "Invalid access token"),
            TokenVerificationError::ExpiredToken => write!(f, "Access token has expired"),
        }
    }
}

impl std::error::Error for TokenVerificationError {}
