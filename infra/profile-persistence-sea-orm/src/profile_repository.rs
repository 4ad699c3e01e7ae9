use profile_server_app::domain::{
    ProfileId, RepoCreateError, RepoDeleteError, RepoRetrieveError, RepoUpdateError, UserId,
    profile::{Address, Profile, ProfileDraft, ProfileRepository},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set, SqlErr, TransactionError,
    TransactionTrait,
};

use crate::entity::{address, profile};

pub struct ProfileRepositoryImpl {
    db: DatabaseConnection,
}

impl ProfileRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn into_domain(profile_model: profile::Model, address_model: address::Model) -> Profile {
        Profile {
            id: ProfileId(profile_model.id),
            user_id: UserId(profile_model.user_id),
            first_name: profile_model.first_name,
            last_name: profile_model.last_name,
            phone_number: profile_model.phone_number,
            address: Address {
                street_name: address_model.street_name,
                postal_code: address_model.postal_code,
                city: address_model.city,
            },
        }
    }

    async fn find_by_user_id(
        txn: &DatabaseTransaction,
        user_id: &str,
    ) -> Result<Option<profile::Model>, DbErr> {
        profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(txn)
            .await
    }
}

fn create_error(e: DbErr) -> RepoCreateError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepoCreateError::Conflict,
        _ => RepoCreateError::StorageError(e.to_string()),
    }
}

#[async_trait::async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Profile, RepoRetrieveError> {
        let found = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id.as_str()))
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?;

        match found {
            Some((profile_model, Some(address_model))) => {
                Ok(Self::into_domain(profile_model, address_model))
            }
            Some((profile_model, None)) => Err(RepoRetrieveError::StorageError(format!(
                "profile {} has no address row",
                profile_model.id
            ))),
            None => Err(RepoRetrieveError::NotFound),
        }
    }

    async fn create_profile(&self, profile: Profile) -> Result<(), RepoCreateError> {
        let profile_model = profile::ActiveModel {
            id: Set(profile.id.0),
            user_id: Set(profile.user_id.0),
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            phone_number: Set(profile.phone_number),
        };
        let address_model = address::ActiveModel {
            account_profile_id: Set(profile.id.0),
            street_name: Set(profile.address.street_name),
            postal_code: Set(profile.address.postal_code),
            city: Set(profile.address.city),
        };

        let res = self
            .db
            .transaction::<_, (), RepoCreateError>(|txn| {
                Box::pin(async move {
                    profile_model.insert(txn).await.map_err(create_error)?;
                    address_model.insert(txn).await.map_err(create_error)?;
                    Ok(())
                })
            })
            .await;
        match res {
            Ok(()) => Ok(()),
            Err(TransactionError::Transaction(e)) => Err(e),
            Err(TransactionError::Connection(e)) => Err(create_error(e)),
        }
    }

    async fn update_profile(&self, draft: &ProfileDraft) -> Result<(), RepoUpdateError> {
        let draft = draft.clone();
        let res = self
            .db
            .transaction::<_, (), RepoUpdateError>(|txn| {
                Box::pin(async move {
                    let storage = |e: DbErr| RepoUpdateError::StorageError(e.to_string());

                    let Some(existing) = Self::find_by_user_id(txn, draft.user_id.as_str())
                        .await
                        .map_err(storage)?
                    else {
                        return Err(RepoUpdateError::NotFound);
                    };
                    let profile_id = existing.id;

                    let mut profile_model: profile::ActiveModel = existing.into();
                    profile_model.first_name = Set(draft.first_name);
                    profile_model.last_name = Set(draft.last_name);
                    profile_model.phone_number = Set(draft.phone_number);
                    profile_model.update(txn).await.map_err(storage)?;

                    let address_model = address::ActiveModel {
                        account_profile_id: Unchanged(profile_id),
                        street_name: Set(draft.address.street_name),
                        postal_code: Set(draft.address.postal_code),
                        city: Set(draft.address.city),
                    };
                    address_model.update(txn).await.map_err(storage)?;
                    Ok(())
                })
            })
            .await;
        match res {
            Ok(()) => Ok(()),
            Err(TransactionError::Transaction(e)) => Err(e),
            Err(TransactionError::Connection(e)) => {
                Err(RepoUpdateError::StorageError(e.to_string()))
            }
        }
    }

    async fn delete_profile_by_user_id(&self, user_id: &UserId) -> Result<(), RepoDeleteError> {
        let user_id = user_id.0.clone();
        let res = self
            .db
            .transaction::<_, (), RepoDeleteError>(|txn| {
                Box::pin(async move {
                    let storage = |e: DbErr| RepoDeleteError::StorageError(e.to_string());

                    let Some(existing) = Self::find_by_user_id(txn, &user_id)
                        .await
                        .map_err(storage)?
                    else {
                        return Err(RepoDeleteError::NotFound);
                    };

                    // sqlite does not enforce the cascade unless foreign keys are switched on
                    address::Entity::delete_by_id(existing.id)
                        .exec(txn)
                        .await
                        .map_err(storage)?;
                    profile::Entity::delete_by_id(existing.id)
                        .exec(txn)
                        .await
                        .map_err(storage)?;
                    Ok(())
                })
            })
            .await;
        match res {
            Ok(()) => Ok(()),
            Err(TransactionError::Transaction(e)) => Err(e),
            Err(TransactionError::Connection(e)) => {
                Err(RepoDeleteError::StorageError(e.to_string()))
            }
        }
    }
}
