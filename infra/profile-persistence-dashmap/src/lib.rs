use dashmap::{DashMap, mapref::entry::Entry};
use profile_server_app::domain::{
    RepoCreateError, RepoDeleteError, RepoRetrieveError, RepoUpdateError, UserId,
    profile::{Profile, ProfileDraft, ProfileRepository},
};

/// Profile store that lives in process memory, keyed by user id.
/// Nothing survives a restart.
pub struct InMemoryProfileRepository {
    profiles: DashMap<UserId, Profile>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Profile, RepoRetrieveError> {
        self.profiles
            .get(user_id)
            .map(|p| p.clone())
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn create_profile(&self, profile: Profile) -> Result<(), RepoCreateError> {
        match self.profiles.entry(profile.user_id.clone()) {
            Entry::Occupied(_) => Err(RepoCreateError::Conflict),
            Entry::Vacant(entry) => {
                entry.insert(profile);
                Ok(())
            }
        }
    }

    async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), RepoUpdateError> {
        let Some(mut stored) = self.profiles.get_mut(&draft.user_id) else {
            return Err(RepoUpdateError::NotFound);
        };
        let id = stored.id;
        *stored = draft.clone().into_profile(id);
        Ok(())
    }

    async fn delete_profile_by_user_id(&self, user_id: &UserId) -> Result<(), RepoDeleteError> {
        match self.profiles.remove(user_id) {
            Some(_) => Ok(()),
            None => Err(RepoDeleteError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use profile_server_app::domain::{ProfileId, profile::Address};

    use super::*;

    fn draft(user_id: &str, city: &str) -> ProfileDraft {
        ProfileDraft {
            user_id: UserId::new(user_id),
            first_name: Some("Test".to_string()),
            last_name: None,
            phone_number: None,
            address: Address {
                street_name: "Testgatan 11".to_string(),
                postal_code: "11111".to_string(),
                city: city.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let repo = InMemoryProfileRepository::new();
        let profile = draft("u1", "Test").into_profile(ProfileId::new());

        repo.create_profile(profile.clone()).await.unwrap();
        assert_eq!(
            repo.get_profile_by_user_id(&UserId::new("u1")).await.unwrap(),
            profile
        );

        repo.delete_profile_by_user_id(&UserId::new("u1"))
            .await
            .unwrap();
        assert!(matches!(
            repo.get_profile_by_user_id(&UserId::new("u1")).await,
            Err(RepoRetrieveError::NotFound)
        ));
        assert!(matches!(
            repo.delete_profile_by_user_id(&UserId::new("u1")).await,
            Err(RepoDeleteError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryProfileRepository::new();
        let profile = draft("u1", "Test").into_profile(ProfileId::new());
        repo.create_profile(profile.clone()).await.unwrap();

        repo.update_profile(&draft("u1", "Malmö")).await.unwrap();

        let stored = repo.get_profile_by_user_id(&UserId::new("u1")).await.unwrap();
        assert_eq!(stored.id, profile.id);
        assert_eq!(stored.address.city, "Malmö");
        assert!(matches!(
            repo.update_profile(&draft("u2", "Malmö")).await,
            Err(RepoUpdateError::NotFound)
        ));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_leave_one_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());

        let attempts = (0..16).map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create_profile(draft("racer", "Test").into_profile(ProfileId::new()))
                    .await
            })
        });
        let results = futures::future::join_all(attempts).await;

        let created = results
            .into_iter()
            .filter(|r| matches!(r, Ok(Ok(()))))
            .count();
        assert_eq!(created, 1);
        assert_eq!(repo.len(), 1);
    }
}
