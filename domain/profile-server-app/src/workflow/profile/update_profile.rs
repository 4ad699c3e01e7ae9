use std::sync::Arc;

use crate::domain::{
    RepoUpdateError,
    profile::{ProfileDraft, ProfileRepository},
};

#[async_trait::async_trait]
pub trait UpdateProfileUseCase {
    /// Replaces the profile stored under `draft.user_id` with `draft`.
    async fn update_profile(&self, draft: ProfileDraft) -> Result<(), UpdateProfileError>;
}

#[derive(Debug)]
pub enum UpdateProfileError {
    ProfileNotFound,
    RepositoryError,
}

pub struct UpdateProfileUseCaseImpl<R: ProfileRepository> {
    profile_repo: Arc<R>,
}

impl<R: ProfileRepository> UpdateProfileUseCaseImpl<R> {
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait::async_trait]
impl<R: ProfileRepository + Send + Sync + 'static> UpdateProfileUseCase
    for UpdateProfileUseCaseImpl<R>
{
    async fn update_profile(&self, draft: ProfileDraft) -> Result<(), UpdateProfileError> {
        let user_id = &draft.user_id;
        match self.profile_repo.update_profile(&draft).await {
            Ok(()) => {
                log::info!("Updated profile of user id {}", user_id);
                Ok(())
            }
            Err(RepoUpdateError::NotFound) => {
                log::warn!("Rejected update of unknown user id {}", user_id);
                Err(UpdateProfileError::ProfileNotFound)
            }
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to update profile of user id {}: {}", user_id, e);
                Err(UpdateProfileError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            ProfileId,
            profile::{Address, mock::MockProfileRepository},
        },
        workflow::profile::fixtures::draft,
    };

    use super::*;

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let repo = MockProfileRepository::default();
        let original = draft("u1").into_profile(ProfileId::new());
        repo.insert(original.clone());
        let use_case = UpdateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        let mut replacement = draft("u1");
        replacement.first_name = Some("New".to_string());
        replacement.last_name = None;
        replacement.phone_number = Some(String::new());
        replacement.address = Address {
            street_name: "Nygatan 2".to_string(),
            postal_code: "22222".to_string(),
            city: "Lund".to_string(),
        };
        use_case.update_profile(replacement.clone()).await.unwrap();

        let stored = repo.stored("u1").unwrap();
        assert_eq!(stored, replacement.into_profile(original.id));
    }

    #[tokio::test]
    async fn test_update_unknown_user_id() {
        let repo = MockProfileRepository::default();
        let use_case = UpdateProfileUseCaseImpl::new(Arc::new(repo.clone()));

        assert!(matches!(
            use_case.update_profile(draft("ghost")).await,
            Err(UpdateProfileError::ProfileNotFound)
        ));
        assert!(repo.stored("ghost").is_none());
    }

    #[tokio::test]
    async fn test_update_storage_failure() {
        let use_case = UpdateProfileUseCaseImpl::new(Arc::new(MockProfileRepository::failing()));

        assert!(matches!(
            use_case.update_profile(draft("u1")).await,
            Err(UpdateProfileError::RepositoryError)
        ));
    }
}
