pub mod credentials;
pub mod login;
pub mod passwords;
pub mod refresh;
pub mod refresh_tokens;
pub mod revoke;
pub mod session;
