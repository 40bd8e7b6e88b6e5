pub mod config;
pub mod models;
pub mod services;

pub use config::{
    CredentialProvider, EnvCredentialProvider, LiveKitCredentials, ServerConfig,
    StaticCredentialProvider,
};
pub use models::claims::{AccessClaims, VideoGrant};
pub use services::errors::token_service_errors::TokenServiceError;
pub use services::errors::token_verification_errors::TokenVerificationError;
pub use services::token_service::{
    IssuedToken, JwtTokenSigner, TokenService, TokenSigner, LIVEKIT_URL,
};
