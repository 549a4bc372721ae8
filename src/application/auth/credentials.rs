use axum::http::{HeaderMap, header::AUTHORIZATION};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("authorization header not present")]
    HeaderMissing,
    #[error("token not present in authorization header")]
    TokenMissing,
}

/// Second whitespace-separated field of the `Authorization` header, verbatim.
///
/// The scheme in the first field is not inspected.
fn authorization_field(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(CredentialError::HeaderMissing)?;

    value
        .split_whitespace()
        .nth(1)
        .ok_or(CredentialError::TokenMissing)
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, CredentialError> {
    authorization_field(headers)
}

/// Extract the key from `Authorization: ApiKey <key>`
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, CredentialError> {
    authorization_field(headers)
}

/// Compare a presented secret against the expected one without leaking
/// where they differ. Both sides are hashed first so lengths match.
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());

    provided
        .iter()
        .zip(expected.iter())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
