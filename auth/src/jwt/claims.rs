use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Registered JWT claims carried by every identity token.
///
/// Field order follows RFC 7519 registered-claim order (`iss`, `sub`, `exp`, `iat`).
/// All four are required; tokens missing any of them do not deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject (canonical user UUID string)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject issued at `issued_at` and valid for `lifetime`.
    ///
    /// Returns `None` when `issued_at + lifetime` is not representable.
    pub fn new(
        issuer: impl ToString,
        subject: Uuid,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(lifetime)?;

        Some(Self {
            iss: issuer.to_string(),
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        })
    }

    /// Check if token is expired.
    ///
    /// A token is expired from the `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
