use bcrypt::hash_with_result;
use bcrypt::verify;
use bcrypt::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Produces bcrypt credentials in the `$2a$` modular-crypt format, so hashes
/// written by earlier deployments keep verifying.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Work factor used by the service when none is configured.
    pub const DEFAULT_COST: u32 = 10;

    /// Create a new password hasher.
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor (4..=31), fixed for the lifetime of the hasher
    ///
    /// # Returns
    /// PasswordHasher instance
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor embedded in every credential this hasher produces.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is drawn for every call, so hashing the same password
    /// twice yields different credentials.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash (may be empty or any Unicode)
    ///
    /// # Returns
    /// Modular-crypt string (includes algorithm tag, cost, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or the system RNG failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash_with_result(password.as_bytes(), self.cost)
            .map(|parts| parts.format_for_version(Version::TwoA))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The cost and salt are taken from `stored`, not from this hasher, and the
    /// digests are compared in constant time.
    ///
    /// # Arguments
    /// * `stored` - Stored credential in modular-crypt format
    /// * `candidate` - Plaintext password to check
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the credential
    /// * `MalformedCredential` - `stored` is not a valid bcrypt string
    pub fn verify(&self, stored: &str, candidate: &str) -> Result<(), PasswordError> {
        match verify(candidate.as_bytes(), stored) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(e) => Err(PasswordError::MalformedCredential(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}
