//! Storage abstraction for users
//!
//! The service only sees the [`UserRepository`] trait; concrete adapters live
//! in the submodules and are picked at startup.

use async_trait::async_trait;
use common::error::DatabaseError;
use thiserror::Error;

use crate::models::{NewUser, User};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

/// Errors raised by repository adapters
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No user with the requested id exists
    #[error("user {0} not found")]
    NotFound(i64),

    /// The backing store failed
    #[error("storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Persistence port for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError>;

    /// Persist a new user as active, assigning its id and creation timestamp
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// All users whose active flag is set, ordered by id
    async fn find_active(&self) -> Result<Vec<User>, RepositoryError>;
}
