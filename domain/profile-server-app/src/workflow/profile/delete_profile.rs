use std::sync::Arc;

use crate::domain::{RepoDeleteError, UserId, profile::ProfileRepository};

#[async_trait::async_trait]
pub trait DeleteProfileUseCase {
    async fn delete_profile_by_user_id(&self, user_id: &UserId) -> Result<(), DeleteProfileError>;
}

#[derive(Debug)]
pub enum DeleteProfileError {
    InvalidUserId,
    ProfileNotFound,
    RepositoryError,
}

pub struct DeleteProfileUseCaseImpl<R: ProfileRepository> {
    profile_repo: Arc<R>,
}

impl<R: ProfileRepository> DeleteProfileUseCaseImpl<R> {
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait::async_trait]
impl<R: ProfileRepository + Send + Sync + 'static> DeleteProfileUseCase
    for DeleteProfileUseCaseImpl<R>
{
    async fn delete_profile_by_user_id(&self, user_id: &UserId) -> Result<(), DeleteProfileError> {
        if user_id.is_blank() {
            return Err(DeleteProfileError::InvalidUserId);
        }
        match self.profile_repo.delete_profile_by_user_id(user_id).await {
            Ok(()) => {
                log::info!("Deleted profile of user id {}", user_id);
                Ok(())
            }
            Err(RepoDeleteError::NotFound) => Err(DeleteProfileError::ProfileNotFound),
            Err(RepoDeleteError::StorageError(e)) => {
                log::error!("Failed to delete profile of user id {}: {}", user_id, e);
                Err(DeleteProfileError::RepositoryError)
            }
        }
    }
}
