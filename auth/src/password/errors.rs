use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password does not match")]
    Mismatch,

    #[error("Invalid password hash: {0}")]
    MalformedCredential(String),
}

impl PasswordError {
    /// Whether the error is the ordinary "wrong password" outcome rather than a fault.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, PasswordError::Mismatch)
    }
}
