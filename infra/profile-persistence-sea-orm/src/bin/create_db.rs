use profile_persistence_sea_orm::{create_db_pool, create_schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("PROFILE_DB_URL").expect("PROFILE_DB_URL must be set");
    let pool = create_db_pool(&db_url, 1)
        .await
        .expect("Failed to connect to database");

    create_schema(&pool)
        .await
        .expect("Failed to create profile tables");

    println!("Created database tables successfully");
}
