use crate::domain::{
    ProfileId, RepoCreateError, RepoDeleteError, RepoRetrieveError, RepoUpdateError, UserId,
};

/// Persistence gateway for profiles. Every call commits before it returns,
/// and the address is always read and written together with its profile.
#[async_trait::async_trait]
pub trait ProfileRepository {
    async fn get_profile_by_user_id(&self, user_id: &UserId)
    -> Result<Profile, RepoRetrieveError>;

    /// Must fail with `Conflict` if a profile with the same user id exists.
    async fn create_profile(&self, profile: Profile) -> Result<(), RepoCreateError>;

    /// Overwrites every mutable field of the profile stored under
    /// `draft.user_id`. The stored id is kept.
    async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), RepoUpdateError>;

    async fn delete_profile_by_user_id(&self, user_id: &UserId) -> Result<(), RepoDeleteError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

/// Caller-supplied profile content. Carries everything but the id, which is
/// assigned on creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Address,
}

impl ProfileDraft {
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            address: self.address,
        }
    }
}
