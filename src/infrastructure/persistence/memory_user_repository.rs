//! Process-local user repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// A repository that keeps users in memory.
///
/// Selected with `DB_DRIVER=memory`. Data is lost on restart. Ids start at 1
/// and are never reused, matching a `SERIAL` column.
///
/// # Use Cases
///
/// - Local development without PostgreSQL
/// - HTTP-level tests that exercise the real service and handlers
pub struct InMemoryUserRepository {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory user repository");
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut state = self.state.write().await;

        let id = state.last_id.checked_add(1).ok_or_else(|| {
            AppError::internal("User id space exhausted", json!({ "last_id": state.last_id }))
        })?;
        state.last_id = id;

        let user = User::new(id, new_user.name, new_user.dob);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let len = self.state.read().await.users.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn update(&self, id: i32, update: NewUser) -> Result<Option<User>, AppError> {
        let mut state = self.state.write().await;

        Ok(state.users.get_mut(&id).map(|user| {
            user.name = update.name;
            user.dob = update.dob;
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.state.write().await.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            dob: "2000-01-01".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("a")).await.unwrap();
        let second = repo.create(new_user("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("a")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(new_user("b")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(new_user(name)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("old")).await.unwrap();

        let update = NewUser {
            name: "new".to_string(),
            dob: "1999-12-31".parse().unwrap(),
        };
        let updated = repo.update(user.id, update).await.unwrap().unwrap();

        assert_eq!(updated.name, "new");
        assert_eq!(updated.dob.to_string(), "1999-12-31");
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.find_by_id(9).await.unwrap().is_none());
        assert!(repo.update(9, new_user("x")).await.unwrap().is_none());
        assert!(!repo.delete(9).await.unwrap());
    }
}
