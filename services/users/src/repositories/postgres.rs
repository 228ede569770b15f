//! PostgreSQL user repository

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use super::{RepositoryError, UserRepository};
use crate::models::{NewUser, User};

/// User repository backed by the `users` table
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        active: row.get("active"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        match row {
            Some(row) => Ok(user_from_row(&row)),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        info!("Creating new user: {}", user.email);

        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, active)
            VALUES ($1, $2, TRUE)
            RETURNING id, name, email, active, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(user_from_row(&row))
    }

    async fn find_active(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, active, created_at
            FROM users
            WHERE active
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(rows.iter().map(user_from_row).collect())
    }
}
