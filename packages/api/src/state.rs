use std::sync::Arc;

use shared::{EnvCredentialProvider, JwtTokenSigner, TokenService};

#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        AppState { token_service }
    }

    /// Signs with HS256 and reads credentials from the environment per request.
    pub fn from_env() -> Self {
        let token_service = TokenService::new(
            Arc::new(EnvCredentialProvider),
            Arc::new(JwtTokenSigner),
        );
        AppState::new(Arc::new(token_service))
    }
}
