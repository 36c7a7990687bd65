use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::models::CreateChirpCommand;
use crate::domain::chirp::ports::ChirpRepository;
use crate::domain::chirp::ports::ChirpServicePort;

/// Domain service implementation for chirp operations.
pub struct ChirpService<CR>
where
    CR: ChirpRepository,
{
    repository: Arc<CR>,
}

impl<CR> ChirpService<CR>
where
    CR: ChirpRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ChirpServicePort for ChirpService<CR>
where
    CR: ChirpRepository,
{
    async fn create_chirp(&self, command: CreateChirpCommand) -> Result<Chirp, ChirpError> {
        let now = Utc::now();
        let chirp = Chirp {
            id: ChirpId::new(),
            user_id: command.user_id,
            body: command.body,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(chirp).await
    }

    async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, ChirpError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ChirpError::NotFound(id.to_string()))
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::chirp::models::ChirpBody;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestChirpRepository {}

        #[async_trait]
        impl ChirpRepository for TestChirpRepository {
            async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError>;
            async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError>;
            async fn list_all(&self) -> Result<Vec<Chirp>, ChirpError>;
        }
    }

    fn chirp(user_id: UserId, body: &str) -> Chirp {
        let now = Utc::now();
        Chirp {
            id: ChirpId::new(),
            user_id,
            body: ChirpBody::new(body.to_string()).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_chirp_success() {
        let mut repository = MockTestChirpRepository::new();
        let author = UserId::new();

        repository
            .expect_create()
            .withf(move |chirp| {
                chirp.user_id == author
                    && chirp.body.as_str() == "Hello, world!"
                    && chirp.created_at == chirp.updated_at
            })
            .times(1)
            .returning(|chirp| Ok(chirp));

        let service = ChirpService::new(Arc::new(repository));

        let command = CreateChirpCommand::new(
            author,
            ChirpBody::new("Hello, world!".to_string()).unwrap(),
        );

        let created = service.create_chirp(command).await.unwrap();
        assert_eq!(created.user_id, author);
        assert_eq!(created.body.as_str(), "Hello, world!");
    }

    #[tokio::test]
    async fn test_create_chirp_unknown_author() {
        let mut repository = MockTestChirpRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|chirp| Err(ChirpError::UnknownAuthor(chirp.user_id.to_string())));

        let service = ChirpService::new(Arc::new(repository));

        let command = CreateChirpCommand::new(
            UserId::new(),
            ChirpBody::new("orphan".to_string()).unwrap(),
        );

        let result = service.create_chirp(command).await;
        assert!(matches!(result.unwrap_err(), ChirpError::UnknownAuthor(_)));
    }

    #[tokio::test]
    async fn test_get_chirp_success() {
        let mut repository = MockTestChirpRepository::new();

        let expected = chirp(UserId::new(), "first");
        let chirp_id = expected.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == chirp_id)
            .times(1)
            .returning(move |_| Ok(Some(expected.clone())));

        let service = ChirpService::new(Arc::new(repository));

        let found = service.get_chirp(&chirp_id).await.unwrap();
        assert_eq!(found.id, chirp_id);
        assert_eq!(found.body.as_str(), "first");
    }

    #[tokio::test]
    async fn test_get_chirp_not_found() {
        let mut repository = MockTestChirpRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ChirpService::new(Arc::new(repository));

        let result = service.get_chirp(&ChirpId::new()).await;
        assert!(matches!(result.unwrap_err(), ChirpError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_chirps_keeps_repository_order() {
        let mut repository = MockTestChirpRepository::new();
        let author = UserId::new();

        let chirps = vec![chirp(author, "one"), chirp(author, "two")];
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(chirps.clone()));

        let service = ChirpService::new(Arc::new(repository));

        let listed = service.list_chirps().await.unwrap();
        let bodies: Vec<&str> = listed.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["one", "two"]);
    }
}
