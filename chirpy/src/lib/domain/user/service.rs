use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::TokenLifetime;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// bcrypt work runs on the blocking pool so slow hashes never stall the runtime.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    max_token_lifetime_seconds: i64,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `max_token_lifetime_seconds` - Longest (and default) login token lifetime
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        max_token_lifetime_seconds: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            max_token_lifetime_seconds,
        }
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, UserError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| UserError::Unknown(format!("Blocking task failed: {}", e)))
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            run_blocking(move || authenticator.hash_password(&password)).await??;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let email = EmailAddress::new(command.email).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let lifetime = TokenLifetime::clamped(
            command.requested_lifetime_seconds,
            self.max_token_lifetime_seconds,
        );

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash = user.password_hash.clone();
        let subject = user.id.0;

        let result = run_blocking(move || {
            authenticator.authenticate(
                &password,
                &password_hash,
                subject,
                lifetime.as_duration(),
            )
        })
        .await?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            other => UserError::Authentication(other),
        })?;

        Ok(Session {
            user,
            token: result.access_token,
        })
    }

    async fn reset(&self) -> Result<u64, UserError> {
        self.repository.delete_all().await
    }
}
