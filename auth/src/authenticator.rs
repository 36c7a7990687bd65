use chrono::Duration;
use http::HeaderMap;
use uuid::Uuid;

use crate::bearer;
use crate::bearer::BearerError;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Owns the signing secret; the hasher and token service stay stateless.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
    secret: Vec<u8>,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Bearer error: {0}")]
    Bearer(#[from] BearerError),
}

impl AuthenticationError {
    /// Whether the request should be answered with a generic unauthorized response.
    ///
    /// False for hashing and minting faults, which are the service's own failures.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            AuthenticationError::InvalidCredentials => true,
            AuthenticationError::Password(err) => !matches!(err, PasswordError::HashingFailed(_)),
            AuthenticationError::Token(err) => err.is_rejection(),
            AuthenticationError::Bearer(_) => true,
        }
    }

    /// Whether the failure lies with the service or its stored data rather than the caller.
    ///
    /// A malformed stored credential is a fault even though the caller still
    /// receives the generic unauthorized response.
    pub fn is_fault(&self) -> bool {
        match self {
            AuthenticationError::InvalidCredentials | AuthenticationError::Bearer(_) => false,
            AuthenticationError::Password(err) => !err.is_mismatch(),
            AuthenticationError::Token(err) => !err.is_rejection(),
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("password_hasher", &self.password_hasher)
            .field("token_service", &self.token_service)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Shared key for token signing
    /// * `issuer` - Issuer written to and required in every token
    /// * `cost` - bcrypt work factor for new credentials
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(secret: &[u8], issuer: impl ToString, cost: u32) -> Self {
        Self {
            password_hasher: PasswordHasher::new(cost),
            token_service: TokenService::new(issuer),
            secret: secret.to_vec(),
        }
    }

    pub fn password_hasher(&self) -> &PasswordHasher {
        &self.password_hasher
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a candidate password against a stored credential.
    pub fn verify_password(&self, stored_hash: &str, candidate: &str) -> Result<(), PasswordError> {
        self.password_hasher.verify(stored_hash, candidate)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored credential
    /// * `subject` - User identifier to embed in the token
    /// * `lifetime` - Token lifetime
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored credential is malformed
    /// * `Token` - Token minting failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: Uuid,
        lifetime: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.password_hasher.verify(stored_hash, password) {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => return Err(AuthenticationError::InvalidCredentials),
            Err(err) => return Err(err.into()),
        }

        let access_token = self.issue_token(subject, lifetime)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: Uuid, lifetime: Duration) -> Result<String, JwtError> {
        self.token_service.mint(subject, &self.secret, lifetime)
    }

    /// Validate a token and return its subject.
    pub fn validate_token(&self, token: &str) -> Result<Uuid, JwtError> {
        self.token_service.validate(token, &self.secret)
    }

    /// Authorize a request from its `Authorization` headers.
    ///
    /// # Returns
    /// Subject of the presented bearer token
    ///
    /// # Errors
    /// * `Bearer` - No usable bearer credential
    /// * `Token` - Token rejected
    pub fn authorize(&self, headers: &HeaderMap) -> Result<Uuid, AuthenticationError> {
        let token = bearer::extract_from_headers(headers)?;
        Ok(self.validate_token(&token)?)
    }
}
