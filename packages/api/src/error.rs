use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::TokenServiceError;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "LiveKit credentials not configured";
pub const TOKEN_GENERATION_MESSAGE: &str = "Failed to generate token";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query string";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    TokenService(TokenServiceError),
    InvalidQuery,
}

impl From<TokenServiceError> for ApiError {
    fn from(error: TokenServiceError) -> Self {
        ApiError::TokenService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Only fixed messages go out; the cause stays in the server log.
        let (status, message) = match self {
            ApiError::TokenService(TokenServiceError::MissingCredentials) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MISSING_CREDENTIALS_MESSAGE,
            ),
            ApiError::TokenService(TokenServiceError::SigningError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, TOKEN_GENERATION_MESSAGE)
            }
            ApiError::InvalidQuery => (StatusCode::INTERNAL_SERVER_ERROR, INVALID_QUERY_MESSAGE),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
