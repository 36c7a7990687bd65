use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::JwtError;

/// Identity token service for minting and validating tokens.
///
/// Tokens are compact JWS strings signed with HS256 (HMAC with SHA-256), the only
/// algorithm this service accepts. The issuer is fixed at construction; the secret
/// is supplied per call and never retained.
#[derive(Debug, Clone)]
pub struct TokenService {
    issuer: String,
}

impl TokenService {
    /// Signing algorithm for every token this service mints or accepts.
    pub const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a new token service.
    ///
    /// # Arguments
    /// * `issuer` - Value written to and required in the `iss` claim
    ///
    /// # Returns
    /// TokenService instance configured with HS256 algorithm
    pub fn new(issuer: impl ToString) -> Self {
        Self {
            issuer: issuer.to_string(),
        }
    }

    /// Issuer this service writes and expects.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Mint a signed token for a subject.
    ///
    /// A zero or negative `lifetime` is accepted and yields an already expired token.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed in `sub`
    /// * `secret` - Shared signing key
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry not representable or signing failed
    pub fn mint(
        &self,
        subject: Uuid,
        secret: &[u8],
        lifetime: Duration,
    ) -> Result<String, JwtError> {
        self.mint_at(subject, secret, lifetime, Utc::now())
    }

    /// Mint a token as if issued at `issued_at`.
    pub fn mint_at(
        &self,
        subject: Uuid,
        secret: &[u8],
        lifetime: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(&self.issuer, subject, issued_at, lifetime).ok_or_else(|| {
            JwtError::EncodingFailed(format!("lifetime out of range: {}", lifetime))
        })?;

        encode(
            &Header::new(Self::ALGORITHM),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its subject.
    ///
    /// # Arguments
    /// * `token` - JWT token string to validate
    /// * `secret` - Shared signing key
    ///
    /// # Returns
    /// Authenticated user identifier
    ///
    /// # Errors
    /// * `Malformed` - Not a decodable JWS or required claims missing
    /// * `UnsupportedAlgorithm` - Header declares anything but HS256
    /// * `InvalidSignature` - Signature does not verify with `secret`
    /// * `Expired` - Current time is at or after `exp`
    /// * `WrongIssuer` - `iss` differs from this service's issuer
    /// * `MalformedSubject` - `sub` is not a UUID
    pub fn validate(&self, token: &str, secret: &[u8]) -> Result<Uuid, JwtError> {
        self.validate_at(token, secret, Utc::now())
    }

    /// Validate a token against an explicit current time.
    pub fn validate_at(
        &self,
        token: &str,
        secret: &[u8],
        now: DateTime<Utc>,
    ) -> Result<Uuid, JwtError> {
        // decode_header cannot represent algorithms like "none"
        if let Some(alg) = declared_algorithm(token) {
            if alg != "HS256" {
                return Err(JwtError::UnsupportedAlgorithm(alg));
            }
        }

        let header = decode_header(token)?;
        if header.alg != Self::ALGORITHM {
            return Err(JwtError::UnsupportedAlgorithm(format!("{:?}", header.alg)));
        }

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &self.validation(),
        )?
        .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        if claims.iss != self.issuer {
            return Err(JwtError::WrongIssuer(claims.iss));
        }

        Uuid::parse_str(&claims.sub).map_err(|e| JwtError::MalformedSubject(e.to_string()))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Self::ALGORITHM);
        // Expiry and issuer are checked against the caller's clock in validate_at
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

#[derive(Deserialize)]
struct DeclaredHeader {
    alg: Option<String>,
}

/// `alg` exactly as written in the token header, if the header is readable JSON.
fn declared_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    serde_json::from_slice::<DeclaredHeader>(&bytes).ok()?.alg
}
