pub mod health;
pub mod livekit;
