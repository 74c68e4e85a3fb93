use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::connection_string::ConnectionParams;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection: ConnectionParams,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Create the `posts` table at startup when it does not exist.
    pub create_schema: bool,
}

impl DatabaseConfig {
    /// Connect timeout from the connection string, or the 10s default.
    pub fn connect_timeout(&self) -> Duration {
        self.connection
            .connect_timeout
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT)
    }
}

/// Open the connection pool described by `config`.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!(database = %config.connection, "Connecting to database...");

    let opts = ConnectOptions::new(config.connection.to_url())
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout())
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    if config.create_schema {
        ensure_schema(&db).await?;
    }

    Ok(db)
}

/// Create the `posts` table from the entity definition if it is missing.
#[cfg(feature = "postgres")]
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement =
        Schema::new(backend).create_table_from_entity(super::entity::post::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::info!("Table 'posts' ready");
    Ok(())
}
