pub mod auth;
pub mod chirps;
pub mod password;
pub mod users;
