use axum::{Json, extract::State};
use profile_server_app::{
    domain::{
        UserId,
        profile::{Address, Profile, ProfileDraft},
    },
    workflow::profile::{
        create_profile::CreateProfileError, delete_profile::DeleteProfileError,
        get_profile::GetProfileError, update_profile::UpdateProfileError,
    },
};

use crate::{AppState, app::ServiceError};

const STATUS_FOUND: i32 = 200;
const STATUS_NOT_FOUND: i32 = 404;

const MSG_CREATED: &str = "Account succesfully created";
const MSG_PROFILE_NULL: &str = "Account profile is null";
const MSG_ADDRESS_NULL: &str = "Account profile address is null";
const MSG_ALREADY_EXISTS: &str = "A profile with the given UserId already exists.";

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonProfile {
    /// Assigned by the server. Ignored in requests.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<JsonProfileAddress>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonProfileAddress {
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

impl From<Profile> for JsonProfile {
    fn from(profile: Profile) -> Self {
        Self {
            id: Some(profile.id.to_string()),
            user_id: profile.user_id.0,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone_number: profile.phone_number,
            address: Some(JsonProfileAddress {
                street_name: profile.address.street_name,
                postal_code: profile.address.postal_code,
                city: profile.address.city,
            }),
        }
    }
}

impl JsonProfile {
    /// `None` if the address is missing.
    fn into_draft(self) -> Option<ProfileDraft> {
        let address = self.address?;
        Some(ProfileDraft {
            user_id: UserId(self.user_id),
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            address: Address {
                street_name: address.street_name,
                postal_code: address.postal_code,
                city: address.city,
            },
        })
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdRequest {
    #[serde(default)]
    user_id: String,
}

#[derive(serde::Deserialize)]
pub struct ProfileRequest {
    profile: Option<JsonProfile>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetProfileByUserIdReply {
    pub profile: Option<JsonProfile>,
    pub status_code: i32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct CreateProfileReply {
    pub success: bool,
    pub message: String,
}

impl CreateProfileReply {
    fn failure(message: &str) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.to_string(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SuccessReply {
    pub success: bool,
}

pub async fn get_profile_by_user_id(
    State(app_state): State<AppState>,
    Json(request): Json<UserIdRequest>,
) -> Result<Json<GetProfileByUserIdReply>, ServiceError> {
    let user_id = UserId(request.user_id);
    match app_state
        .app
        .profile_get_use_case
        .get_profile_by_user_id(&user_id)
        .await
    {
        Ok(Some(profile)) => Ok(Json(GetProfileByUserIdReply {
            profile: Some(profile.into()),
            status_code: STATUS_FOUND,
        })),
        Ok(None) => Ok(Json(GetProfileByUserIdReply {
            profile: None,
            status_code: STATUS_NOT_FOUND,
        })),
        Err(GetProfileError::RepositoryError) => Err(ServiceError::Internal(
            "Failed to retrieve profile".to_string(),
        )),
    }
}

pub async fn create_profile(
    State(app_state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<CreateProfileReply>, ServiceError> {
    let Some(profile) = request.profile else {
        return Ok(CreateProfileReply::failure(MSG_PROFILE_NULL));
    };
    let Some(draft) = profile.into_draft() else {
        return Ok(CreateProfileReply::failure(MSG_ADDRESS_NULL));
    };

    match app_state.app.profile_create_use_case.create_profile(draft).await {
        Ok(_) => Ok(Json(CreateProfileReply {
            success: true,
            message: MSG_CREATED.to_string(),
        })),
        Err(CreateProfileError::AlreadyExists) => {
            Ok(CreateProfileReply::failure(MSG_ALREADY_EXISTS))
        }
        Err(CreateProfileError::RepositoryError) => Err(ServiceError::Internal(
            "Failed to create profile".to_string(),
        )),
    }
}

pub async fn update_profile(
    State(app_state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<SuccessReply>, ServiceError> {
    let Some(draft) = request.profile.and_then(JsonProfile::into_draft) else {
        return Ok(Json(SuccessReply { success: false }));
    };

    match app_state.app.profile_update_use_case.update_profile(draft).await {
        Ok(()) => Ok(Json(SuccessReply { success: true })),
        Err(UpdateProfileError::ProfileNotFound) => Ok(Json(SuccessReply { success: false })),
        Err(UpdateProfileError::RepositoryError) => Err(ServiceError::Internal(
            "Failed to update profile".to_string(),
        )),
    }
}

pub async fn delete_profile_by_user_id(
    State(app_state): State<AppState>,
    Json(request): Json<UserIdRequest>,
) -> Result<Json<SuccessReply>, ServiceError> {
    let user_id = UserId(request.user_id);
    match app_state
        .app
        .profile_delete_use_case
        .delete_profile_by_user_id(&user_id)
        .await
    {
        Ok(()) => Ok(Json(SuccessReply { success: true })),
        Err(DeleteProfileError::InvalidUserId | DeleteProfileError::ProfileNotFound) => {
            Ok(Json(SuccessReply { success: false }))
        }
        Err(DeleteProfileError::RepositoryError) => Err(ServiceError::Internal(
            "Failed to delete profile".to_string(),
        )),
    }
}
