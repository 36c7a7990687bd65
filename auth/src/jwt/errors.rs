use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Error type for JWT operations.
///
/// Messages carry enough detail for logs but never key or signature bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Unexpected signing method: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid issuer: {0}")]
    WrongIssuer(String),

    #[error("Token is expired")]
    Expired,

    #[error("Cannot parse subject as UUID: {0}")]
    MalformedSubject(String),
}

impl JwtError {
    /// Whether the token was rejected because of what the client sent.
    ///
    /// Only `EncodingFailed` is a service fault.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, JwtError::EncodingFailed(_))
    }
}

impl From<JsonWebTokenError> for JwtError {
    fn from(err: JsonWebTokenError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => JwtError::UnsupportedAlgorithm(err.to_string()),
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidIssuer => JwtError::WrongIssuer(err.to_string()),
            _ => JwtError::Malformed(err.to_string()),
        }
    }
}
