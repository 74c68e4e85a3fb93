//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{PostRepository, PostService};
use postboard_core::services::PostManager;
use postboard_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use postboard_infra::database::{self, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostService>,
    /// Storage backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Without a database configuration posts are kept in memory. A configured
    /// database that cannot be reached is an error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let state = Self::connect(config).await?;
        tracing::info!(storage = state.storage, "Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = database::connect(config)
            .await
            .with_context(|| format!("failed to connect to {}", config.connection))?;

        Ok(Self::with_repository(
            Arc::new(PostgresPostRepository::new(db)),
            "postgres",
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> anyhow::Result<Self> {
        tracing::warn!("Built without the postgres feature - ignoring DATABASE_URL");
        Ok(Self::in_memory())
    }

    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "in-memory")
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: &'static str) -> Self {
        Self {
            posts: Arc::new(PostManager::new(repo)),
            storage,
        }
    }
}
