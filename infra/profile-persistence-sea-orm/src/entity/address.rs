use sea_orm::entity::prelude::*;

/// One row per profile, keyed by the owning profile's id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account_profile_addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_profile_id: Uuid,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::AccountProfileId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    AccountProfile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
