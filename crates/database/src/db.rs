use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

/// Creates the process-wide connection pool from `DATABASE_URL`.
///
/// Called once at startup; the returned handle is cloned into request
/// state and borrowed for the lifetime of each request.
pub async fn create_pool() -> Result<DatabaseConnection, DbErr> {
    let url = env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_owned()))?;

    Database::connect(url).await
}
