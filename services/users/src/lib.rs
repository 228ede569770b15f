//! Users service
//!
//! A small HTTP service exposing user creation and listing over `/users`,
//! backed by a swappable [`repositories::UserRepository`], plus a periodic
//! background cleanup task.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;

use anyhow::Result;
use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use std::sync::Arc;
use tracing::info;

use crate::{
    config::ServerConfig,
    repositories::{InMemoryUserRepository, PgUserRepository, UserRepository},
};

/// Pick the repository backend described by `config`
///
/// PostgreSQL is used when a database URL is configured; the schema is
/// migrated and connectivity checked before the repository is handed out.
pub async fn build_repository(config: &ServerConfig) -> Result<Arc<dyn UserRepository>> {
    let Some(url) = config.database_url.as_deref() else {
        info!("No database URL configured, using in-memory user store");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    let db_config = DatabaseConfig::from_env(url)?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    Ok(Arc::new(PgUserRepository::new(pool)))
}
