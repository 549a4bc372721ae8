pub mod auth;
pub mod chirps;
pub mod users;
