use std::net::SocketAddr;

use api::{create_app, telemetry, AppState};
use shared::{CredentialProvider, EnvCredentialProvider, ServerConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init_tracing();

    let config = ServerConfig::from_env()?;
    if EnvCredentialProvider.credentials().is_none() {
        warn!("LIVEKIT_API_KEY / LIVEKIT_API_SECRET not set, token requests will fail");
    }

    let app = create_app(AppState::from_env());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("LiveKit token service listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
