use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;

const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Open a pool for the given engine and profile. Does NOT run migrations.
///
/// In-memory SQLite gets exactly one connection: every connection would
/// otherwise see its own empty database.
pub async fn connect_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile)?;

    let mut opt = ConnectOptions::new(url);
    match kind {
        DbKind::SqliteMemory => {
            // Closing the only connection drops the database with it.
            opt.min_connections(1)
                .max_connections(1)
                .idle_timeout(MEMORY_CONN_LIFETIME)
                .max_lifetime(MEMORY_CONN_LIFETIME);
        }
        DbKind::SqliteFile => {
            opt.max_connections(4);
        }
        DbKind::Postgres => {
            opt.max_connections(16);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect to {}: {e}", engine(kind))))?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
) -> Result<DatabaseConnection, AppError> {
    info!(db_kind = ?kind, profile = ?profile, engine = engine(kind), "bootstrap=start");

    let conn = connect_db(kind, profile).await?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!(db_kind = ?kind, "bootstrap=ready");
    Ok(conn)
}
