//! Authentication utilities library
//!
//! Provides the authentication core for the chirpy service:
//! - Password hashing (bcrypt)
//! - JWT token minting and validation (HS256)
//! - Bearer token extraction from `Authorization` headers
//! - Authentication coordination
//!
//! Every operation is synchronous and holds no shared mutable state. Password
//! hashing is deliberately slow; async callers should move it off the runtime.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&hash, "my_password").is_ok());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let service = TokenService::new("chirpy");
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let user_id = Uuid::new_v4();
//!
//! let token = service.mint(user_id, secret, Duration::hours(1)).unwrap();
//! assert_eq!(service.validate(&token, secret).unwrap(), user_id);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//! use http::header::AUTHORIZATION;
//! use http::HeaderMap;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", "chirpy", 4);
//! let user_id = Uuid::new_v4();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, user_id, Duration::hours(1))
//!     .unwrap();
//!
//! // Protected request: extract and validate bearer token
//! let mut headers = HeaderMap::new();
//! headers.insert(
//!     AUTHORIZATION,
//!     format!("Bearer {}", result.access_token).parse().unwrap(),
//! );
//! assert_eq!(auth.authorize(&headers).unwrap(), user_id);
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::extract_bearer_token;
pub use bearer::extract_from_headers;
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
