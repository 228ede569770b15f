//! User service: validation and error context around repository calls

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{NewUser, User},
    repositories::{RepositoryError, UserRepository},
    validation::ValidationError,
};

/// Failures surfaced by [`UserService`]
///
/// Each variant names the operation that failed and keeps the underlying
/// cause as its source.
#[derive(Error, Debug)]
pub enum UserServiceError {
    #[error("user lookup failed: {0}")]
    Lookup(#[source] RepositoryError),

    #[error("invalid user: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("user creation failed: {0}")]
    Creation(#[source] RepositoryError),

    #[error("failed to list users: {0}")]
    Listing(#[source] RepositoryError),
}

impl UserServiceError {
    /// Whether the failure is a lookup for an id that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup(RepositoryError::NotFound(_)))
    }
}

/// Orchestrates user operations over a [`UserRepository`]
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<User, UserServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(UserServiceError::Lookup)
    }

    /// Validate `user` and persist it
    ///
    /// The repository is not called when validation fails.
    pub async fn create_user(&self, user: NewUser) -> Result<User, UserServiceError> {
        if let Err(e) = user.validate() {
            warn!(field = e.field, "Rejected user input: {}", e.reason);
            return Err(e.into());
        }

        let created = self
            .repository
            .create(user)
            .await
            .map_err(UserServiceError::Creation)?;

        info!(user_id = created.id, "Created user");
        Ok(created)
    }

    pub async fn list_active_users(&self) -> Result<Vec<User>, UserServiceError> {
        self.repository
            .find_active()
            .await
            .map_err(UserServiceError::Listing)
    }
}
