use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::chirp::errors::ChirpBodyError;
use crate::domain::chirp::errors::ChirpIdError;
use crate::domain::chirp::profanity;
use crate::domain::user::models::UserId;

/// Chirp aggregate entity.
///
/// A short post owned by the user who wrote it
#[derive(Debug, Clone)]
pub struct Chirp {
    pub id: ChirpId,
    pub user_id: UserId,
    pub body: ChirpBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Chirp unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChirpId(pub Uuid);

impl ChirpId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a chirp ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ChirpIdError> {
        Uuid::parse_str(s)
            .map(ChirpId)
            .map_err(|e| ChirpIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ChirpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Chirp body value type
///
/// At most 140 bytes and free of banned words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    pub const MAX_LENGTH: usize = 140;

    /// Create a new valid chirp body.
    ///
    /// # Arguments
    /// * `body` - Raw chirp text
    ///
    /// # Returns
    /// Validated ChirpBody value object
    ///
    /// # Errors
    /// * `TooLong` - Body longer than 140 bytes
    /// * `Profane` - Body contains a banned word
    pub fn new(body: String) -> Result<Self, ChirpBodyError> {
        let body = Self::with_valid_length(body)?;
        if profanity::contains_profanity(&body) {
            return Err(ChirpBodyError::Profane);
        }
        Ok(Self(body))
    }

    /// Length-check a draft and return it with banned words masked.
    ///
    /// Unlike `new`, profanity is censored rather than rejected.
    ///
    /// # Errors
    /// * `TooLong` - Body longer than 140 bytes
    pub fn cleaned(body: &str) -> Result<String, ChirpBodyError> {
        let body = Self::with_valid_length(body)?;
        Ok(profanity::censor(body))
    }

    fn with_valid_length<S: AsRef<str>>(body: S) -> Result<S, ChirpBodyError> {
        let length = body.as_ref().len();
        if length > Self::MAX_LENGTH {
            Err(ChirpBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(body)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChirpBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to publish a new chirp
#[derive(Debug)]
pub struct CreateChirpCommand {
    pub user_id: UserId,
    pub body: ChirpBody,
}

impl CreateChirpCommand {
    pub fn new(user_id: UserId, body: ChirpBody) -> Self {
        Self { user_id, body }
    }
}
