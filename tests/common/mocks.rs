use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared::{AccessClaims, JwtTokenSigner, TokenServiceError, TokenSigner};

/// Real HS256 signer that counts how often it is asked to sign.
#[derive(Clone, Default)]
pub struct CountingSigner {
    attempts: Arc<AtomicUsize>,
}

impl CountingSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl TokenSigner for CountingSigner {
    fn sign(&self, claims: &AccessClaims, secret: &str) -> Result<String, TokenServiceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        JwtTokenSigner.sign(claims, secret)
    }
}

/// Signer that always fails with the given detail.
pub struct FailingSigner {
    pub detail: String,
}

impl TokenSigner for FailingSigner {
    fn sign(&self, _claims: &AccessClaims, _secret: &str) -> Result<String, TokenServiceError> {
        Err(TokenServiceError::SigningError(self.detail.clone()))
    }
}
