//! Startup routines run once before the server accepts requests.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the development dataset into an empty database.
///
/// Does nothing if any category already exists, so restarting with seeding enabled
/// never duplicates rows.
///
/// # Arguments
/// - `db` - Connected database with migrations applied
///
/// # Returns
/// - `Ok(())` - Dataset inserted, or the database already held data
/// - `Err(AppError::DbErr)` - Failed to count existing rows or insert the dataset
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    let existing = entity::prelude::Category::find().count(db).await?;

    if existing > 0 {
        tracing::info!("Database already contains data, skipping seed");
        return Ok(());
    }

    test_utils::seed::seed(db).await?;

    tracing::info!("Seeded development dataset");

    Ok(())
}
