use thiserror::Error;

/// Failure modes of password hashing and verification
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Password does not match")]
    Mismatch,
    #[error("Invalid password hash: {0}")]
    MalformedHash(String),
}

/// Trait for password hashing and verification
pub trait PasswordHashingService: Send + Sync {
    /// Produces a salted one-way hash with the salt embedded in the output.
    fn hash_password(&self, password: &str) -> Result<String, PasswordError>;

    /// Succeeds only when `password` hashes to `hash` under its embedded salt.
    fn verify_password(&self, password: &str, hash: &str) -> Result<(), PasswordError>;
}
