use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Room used when the caller does not name one.
pub const DEFAULT_ROOM: &str = "demo-room";
/// Participant identity used when the caller does not supply a name.
pub const DEFAULT_IDENTITY: &str = "demo-user";
/// Lifetime of every issued token: 24 hours.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Video permissions carried in the `video` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
}

/// Claims of a LiveKit access token.
///
/// Built once per request and only ever borrowed by the signer, so a signed
/// claim cannot be altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String, // api key
    pub nbf: i64,    // not before
    pub exp: i64,    // expiration time
    pub sub: String, // participant identity
    pub video: VideoGrant,
}

impl AccessClaims {
    /// Builds the claims for `identity` joining `room`, valid from
    /// `issued_at` for [`TOKEN_TTL_SECONDS`].
    ///
    /// Missing or empty values fall back to [`DEFAULT_IDENTITY`] and
    /// [`DEFAULT_ROOM`]; anything else is kept as given.
    pub fn new(
        issuer: &str,
        identity: Option<&str>,
        room: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let nbf = issued_at.timestamp();
        let exp = (issued_at + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp();

        AccessClaims {
            iss: issuer.to_string(),
            nbf,
            exp,
            sub: or_default(identity, DEFAULT_IDENTITY),
            video: VideoGrant {
                room: or_default(room, DEFAULT_ROOM),
                room_join: true,
            },
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.exp - self.nbf
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
