use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::entity::{address, profile};

pub mod entity;
pub mod profile_repository;

pub async fn create_db_pool(
    db_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(max_connections)
        .sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(opt).await
}

/// Creates the profile and address tables unless they already exist.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    let mut profile_table = schema.create_table_from_entity(profile::Entity);
    profile_table.if_not_exists();
    let mut address_table = schema.create_table_from_entity(address::Entity);
    address_table.if_not_exists();

    db.execute(&profile_table).await?;
    db.execute(&address_table).await?;

    log::info!("Profile tables are in place");
    Ok(())
}
