use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The storefront calls the service straight from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::livekit::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
