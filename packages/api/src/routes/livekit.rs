use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{error::ApiError, state::AppState};
use shared::{TokenServiceError, LIVEKIT_URL};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/livekit/token", get(get_token))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TokenQuery {
    pub room: Option<String>,
    pub name: Option<String>,
}

impl TokenQuery {
    /// Picks `room` and `name` out of decoded query pairs. A repeated key
    /// keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = TokenQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "room" if query.room.is_none() => query.room = Some(value),
                "name" if query.name.is_none() => query.name = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
}

#[tracing::instrument(skip_all)]
async fn get_token(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        warn!("Rejected token query string: {}", rejection);
        ApiError::InvalidQuery
    })?;
    let query = TokenQuery::from_pairs(pairs);

    let issued = state
        .token_service
        .issue(query.room.as_deref(), query.name.as_deref())
        .map_err(|e| {
            // Missing credentials are already reported by the service
            if let TokenServiceError::SigningError(_) = e {
                error!("Failed to generate LiveKit token: {}", e);
            }
            ApiError::from(e)
        })?;

    debug!(
        "Issued LiveKit token for {} in room {}",
        issued.claims.sub, issued.claims.video.room
    );
    Ok(Json(TokenResponse {
        token: issued.token,
        url: LIVEKIT_URL.to_string(),
    }))
}
