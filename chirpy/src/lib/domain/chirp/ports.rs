use async_trait::async_trait;

use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::models::CreateChirpCommand;

/// Port for chirp domain service operations.
#[async_trait]
pub trait ChirpServicePort: Send + Sync + 'static {
    /// Publish a chirp for an authenticated user.
    ///
    /// # Arguments
    /// * `command` - Author and validated body
    ///
    /// # Returns
    /// Created chirp entity
    ///
    /// # Errors
    /// * `UnknownAuthor` - Author no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn create_chirp(&self, command: CreateChirpCommand) -> Result<Chirp, ChirpError>;

    /// Retrieve chirp by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Chirp does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, ChirpError>;

    /// Retrieve every chirp, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError>;
}

/// Persistence operations for chirp aggregate.
#[async_trait]
pub trait ChirpRepository: Send + Sync + 'static {
    /// Persist new chirp to storage.
    ///
    /// # Errors
    /// * `UnknownAuthor` - Referenced user does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError>;

    /// Retrieve chirp by identifier.
    ///
    /// # Returns
    /// Optional chirp entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError>;

    /// Retrieve all chirps ordered by creation time, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Chirp>, ChirpError>;
}
