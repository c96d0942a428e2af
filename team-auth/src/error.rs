use thiserror::Error;

/// Errors surfaced by the credential protector.
///
/// Both kinds are fatal to the enclosing save operation: hashing and
/// encoding are expected to succeed on well-formed input, so a failure
/// indicates an environment-level problem the caller must report upward.
/// Absent or empty credential fields are valid states, not errors.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    #[error("Password hashing failed: {0}")]
    HashingError(anyhow::Error),

    #[error("Credential encoding failed: {0}")]
    EncodingError(#[from] serde_json::Error),
}
