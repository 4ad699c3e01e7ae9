use std::sync::Arc;

use crate::domain::{
    RepoRetrieveError, UserId,
    profile::{Profile, ProfileRepository},
};

#[async_trait::async_trait]
pub trait GetProfileUseCase {
    /// `Ok(None)` when no profile is stored under `user_id`.
    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, GetProfileError>;
}

#[derive(Debug)]
pub enum GetProfileError {
    RepositoryError,
}

pub struct GetProfileUseCaseImpl<R: ProfileRepository> {
    profile_repo: Arc<R>,
}

impl<R: ProfileRepository> GetProfileUseCaseImpl<R> {
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait::async_trait]
impl<R: ProfileRepository + Send + Sync + 'static> GetProfileUseCase for GetProfileUseCaseImpl<R> {
    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, GetProfileError> {
        match self.profile_repo.get_profile_by_user_id(user_id).await {
            Ok(profile) => Ok(Some(profile)),
            Err(RepoRetrieveError::NotFound) => Ok(None),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to retrieve profile for user id {}: {}", user_id, e);
                Err(GetProfileError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{ProfileId, profile::mock::MockProfileRepository},
        workflow::profile::fixtures::draft,
    };

    use super::*;

    #[tokio::test]
    async fn test_get_existing_profile() {
        let repo = MockProfileRepository::default();
        let profile = draft("u1").into_profile(ProfileId::new());
        repo.insert(profile.clone());
        let use_case = GetProfileUseCaseImpl::new(Arc::new(repo));

        let found = use_case
            .get_profile_by_user_id(&UserId::new("u1"))
            .await
            .unwrap();
        assert_eq!(found, Some(profile));
    }

    #[tokio::test]
    async fn test_get_missing_profile_is_not_an_error() {
        let use_case = GetProfileUseCaseImpl::new(Arc::new(MockProfileRepository::default()));

        let found = use_case
            .get_profile_by_user_id(&UserId::new("nobody"))
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_get_storage_failure() {
        let use_case = GetProfileUseCaseImpl::new(Arc::new(MockProfileRepository::failing()));

        assert!(matches!(
            use_case.get_profile_by_user_id(&UserId::new("u1")).await,
            Err(GetProfileError::RepositoryError)
        ));
    }
}
