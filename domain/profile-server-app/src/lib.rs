use std::sync::Arc;

use crate::{
    domain::profile::ProfileRepository,
    workflow::profile::{
        create_profile::{CreateProfileUseCase, CreateProfileUseCaseImpl},
        delete_profile::{DeleteProfileUseCase, DeleteProfileUseCaseImpl},
        get_profile::{GetProfileUseCase, GetProfileUseCaseImpl},
        update_profile::{UpdateProfileUseCase, UpdateProfileUseCaseImpl},
    },
};

pub mod domain;
pub mod workflow;

pub struct Application {
    pub profile_get_use_case: Box<dyn GetProfileUseCase + Send + Sync + 'static>,
    pub profile_create_use_case: Box<dyn CreateProfileUseCase + Send + Sync + 'static>,
    pub profile_update_use_case: Box<dyn UpdateProfileUseCase + Send + Sync + 'static>,
    pub profile_delete_use_case: Box<dyn DeleteProfileUseCase + Send + Sync + 'static>,
}

pub fn build_application<R: ProfileRepository + Send + Sync + 'static>(
    profile_repository: Arc<R>,
) -> Application {
    Application {
        profile_get_use_case: Box::new(GetProfileUseCaseImpl::new(profile_repository.clone())),
        profile_create_use_case: Box::new(CreateProfileUseCaseImpl::new(
            profile_repository.clone(),
        )),
        profile_update_use_case: Box::new(UpdateProfileUseCaseImpl::new(
            profile_repository.clone(),
        )),
        profile_delete_use_case: Box::new(DeleteProfileUseCaseImpl::new(profile_repository)),
    }
}
