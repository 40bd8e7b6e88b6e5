use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::CredentialProvider;
use crate::models::claims::AccessClaims;
use crate::services::errors::token_service_errors::TokenServiceError;
use crate::services::errors::token_verification_errors::TokenVerificationError;

#[cfg(test)]
use mockall::automock;

/// LiveKit server the frontends connect to with an issued token.
pub const LIVEKIT_URL: &str = "wss://blytz-livekit.livekit.cloud";

#[cfg_attr(test, automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &AccessClaims, secret: &str) -> Result<String, TokenServiceError>;
}

/// HS256 signer producing LiveKit-compatible JWTs.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwtTokenSigner;

impl JwtTokenSigner {
    /// Checks the signature and validity window of `token`. No route calls
    /// this; it exists for operator tooling and tests.
    pub fn verify(
        &self,
        token: &str,
        secret: &str,
    ) -> Result<AccessClaims, TokenVerificationError> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;

        match decode::<AccessClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(TokenVerificationError::ExpiredToken)
                }
                _ => Err(TokenVerificationError::InvalidToken),
            },
        }
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, claims: &AccessClaims, secret: &str) -> Result<String, TokenServiceError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| TokenServiceError::SigningError(format!("{:#?}", e)))
    }
}

/// A signed token together with the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: AccessClaims,
}

pub struct TokenService {
    credentials: Arc<dyn CredentialProvider>,
    signer: Arc<dyn TokenSigner>,
}

impl TokenService {
    pub fn new(credentials: Arc<dyn CredentialProvider>, signer: Arc<dyn TokenSigner>) -> Self {
        TokenService {
            credentials,
            signer,
        }
    }

    /// Issues a token valid from now.
    pub fn issue(
        &self,
        room: Option<&str>,
        identity: Option<&str>,
    ) -> Result<IssuedToken, TokenServiceError> {
        self.issue_at(room, identity, Utc::now())
    }

    /// Issues a token valid from `issued_at`.
    ///
    /// Credentials are looked up before anything else; when they are missing
    /// the signer is never called.
    pub fn issue_at(
        &self,
        room: Option<&str>,
        identity: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenServiceError> {
        let Some(credentials) = self.credentials.credentials() else {
            warn!("LiveKit credentials missing, refusing to issue token");
            return Err(TokenServiceError::MissingCredentials);
        };

        let claims = AccessClaims::new(&credentials.api_key, identity, room, issued_at);
        debug!(
            room = %claims.video.room,
            identity = %claims.sub,
            "Signing access token"
        );

        let token = self.signer.sign(&claims, &credentials.api_secret)?;
        Ok(IssuedToken { token, claims })
    }
}
