use std::sync::Arc;

use crate::domain::{
    ProfileId, RepoCreateError, RepoRetrieveError,
    profile::{ProfileDraft, ProfileRepository},
};

#[async_trait::async_trait]
pub trait CreateProfileUseCase {
    async fn create_profile(&self, draft: ProfileDraft) -> Result<ProfileId, CreateProfileError>;
}

#[derive(Debug)]
pub enum CreateProfileError {
    AlreadyExists,
    RepositoryError,
}

pub struct CreateProfileUseCaseImpl<R: ProfileRepository> {
    profile_repo: Arc<R>,
}

impl<R: ProfileRepository> CreateProfileUseCaseImpl<R> {
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait::async_trait]
impl<R: ProfileRepository + Send + Sync + 'static> CreateProfileUseCase
    for CreateProfileUseCaseImpl<R>
{
    async fn create_profile(&self, draft: ProfileDraft) -> Result<ProfileId, CreateProfileError> {
        // Not atomic. Concurrent duplicates are caught by create_profile.
        match self.profile_repo.get_profile_by_user_id(&draft.user_id).await {
            Ok(_) => return Err(CreateProfileError::AlreadyExists),
            Err(RepoRetrieveError::NotFound) => {}
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!(
                    "Failed to check for existing profile of user id {}: {}",
                    draft.user_id,
                    e
                );
                return Err(CreateProfileError::RepositoryError);
            }
        }

        let profile_id = ProfileId::new();
        let user_id = draft.user_id.clone();
        match self
            .profile_repo
            .create_profile(draft.into_profile(profile_id))
            .await
        {
            Ok(()) => {
                log::info!("Created profile {} for user id {}", profile_id, user_id);
                Ok(profile_id)
            }
            Err(RepoCreateError::Conflict) => Err(CreateProfileError::AlreadyExists),
            Err(RepoCreateError::StorageError(e)) => {
                log::error!("Failed to create profile for user id {}: {}", user_id, e);
                Err(CreateProfileError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{UserId, profile::mock::MockProfileRepository},
        workflow::profile::fixtures::draft,
    };

    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_stores_draft() {
        let repo = MockProfileRepository::default();
        let use_case = CreateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        let id = use_case.create_profile(draft("u1")).await.unwrap();

        let stored = repo.stored("u1").unwrap();
        assert_eq!(stored, draft("u1").into_profile(id));
    }

    #[tokio::test]
    async fn test_create_twice_is_rejected() {
        let repo = MockProfileRepository::default();
        let use_case = CreateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        let first = use_case.create_profile(draft("u1")).await.unwrap();
        let mut second = draft("u1");
        second.first_name = Some("Other".to_string());

        assert!(matches!(
            use_case.create_profile(second).await,
            Err(CreateProfileError::AlreadyExists)
        ));
        let stored = repo.stored("u1").unwrap();
        assert_eq!(stored.id, first);
        assert_eq!(stored.first_name.as_deref(), Some("Test"));
    }

    #[tokio::test]
    async fn test_create_store_conflict_after_check_is_duplicate() {
        let repo = MockProfileRepository::conflicting();
        let use_case = CreateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        assert!(matches!(
            use_case.create_profile(draft("u1")).await,
            Err(CreateProfileError::AlreadyExists)
        ));
        assert!(repo.stored("u1").is_none());
    }

    #[tokio::test]
    async fn test_create_distinct_users_get_distinct_ids() {
        let repo = MockProfileRepository::default();
        let use_case = CreateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        let a = use_case.create_profile(draft("a")).await.unwrap();
        let b = use_case.create_profile(draft("b")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(repo.profiles.lock().unwrap().len(), 2);
        assert!(repo.stored("a").is_some_and(|p| p.user_id == UserId::new("a")));
    }

    #[tokio::test]
    async fn test_create_storage_failure() {
        let use_case = CreateProfileUseCaseImpl::new(Arc::new(MockProfileRepository::failing()));

        assert!(matches!(
            use_case.create_profile(draft("u1")).await,
            Err(CreateProfileError::RepositoryError)
        ));
    }
}
