pub mod chirps;
pub mod mock;
pub mod refresh_tokens;
pub mod users;
