use anyhow::{anyhow, Context};
use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn create_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .with_context(|| format!("Failed to create pool for {}", database_url))
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get().context("Failed to get DB connection")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        tracing::info!("Applied migration {}", version);
    }
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
pub fn memory_pool() -> anyhow::Result<DbPool> {
    let pool = create_pool(":memory:", 1)?;
    run_migrations(&pool)?;
    Ok(pool)
}
