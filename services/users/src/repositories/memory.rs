//! In-process user store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{RepositoryError, UserRepository};
use crate::models::{NewUser, User};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

/// User repository kept in memory
///
/// Clones share the same underlying store. Ids start at 1 and are never
/// reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, active or not
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    /// Whether no user has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[cfg(test)]
    pub(crate) async fn deactivate(&self, id: i64) {
        if let Some(user) = self.store.write().await.users.get_mut(&id) {
            user.active = false;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        self.store
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let created = User {
            id: store.last_id,
            name: user.name,
            email: user.email,
            active: true,
            created_at: Utc::now(),
        };
        store.users.insert(created.id, created.clone());

        debug!(user_id = created.id, "Stored user in memory");
        Ok(created)
    }

    async fn find_active(&self) -> Result<Vec<User>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .filter(|user| user.active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(NewUser::new("Ada", "ada@example.com")).await.unwrap();
        let second = repo.create(NewUser::new("Grace", "grace@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(NewUser::new("Ada", "ada@example.com")).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), created);
        assert!(matches!(
            repo.find_by_id(99).await,
            Err(RepositoryError::NotFound(99))
        ));
    }

    #[tokio::test]
    async fn test_find_active_filters_inactive_users() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_active().await.unwrap().is_empty());

        repo.create(NewUser::new("Ada", "ada@example.com")).await.unwrap();
        let bob = repo.create(NewUser::new("Bob", "bob@example.com")).await.unwrap();
        repo.create(NewUser::new("Grace", "grace@example.com")).await.unwrap();
        assert!(bob.active);
        repo.deactivate(bob.id).await;

        let names: Vec<_> = repo
            .find_active()
            .await
            .unwrap()
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, ["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryUserRepository::new();
        let clone = repo.clone();

        clone.create(NewUser::new("Ada", "ada@example.com")).await.unwrap();
        assert!(!repo.is_empty().await);
    }
}
