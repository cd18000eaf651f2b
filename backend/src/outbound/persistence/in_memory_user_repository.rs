//! Process-local `UserRepository` used when no database is configured.
//!
//! Records live for the lifetime of the process. Identifiers start at 1 and
//! increase by one per insert.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: Vec<User>,
}

/// In-memory implementation of the user repository port.
///
/// # Examples
/// ```
/// use roster::domain::NewUser;
/// use roster::domain::ports::UserRepository;
/// use roster::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let draft = NewUser::try_from_strings("Ada", "ada@example.com").expect("valid user");
/// let user = repo.create(&draft).await.expect("insert succeeds");
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let next_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id space exhausted"))?;
        store.last_id = next_id;

        let created = User::from_new(UserId::new(next_id), user.clone());
        store.users.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    fn draft(name: &str) -> NewUser {
        NewUser::try_from_strings(name, format!("{name}@example.com")).expect("valid draft")
    }

    #[rstest]
    #[tokio::test]
    async fn assigns_increasing_ids_from_one(repo: InMemoryUserRepository) {
        let first = repo.create(&draft("ada")).await.expect("first insert");
        let second = repo.create(&draft("bea")).await.expect("second insert");

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_returns_every_record(repo: InMemoryUserRepository) {
        assert!(repo.list_all().await.expect("empty list").is_empty());

        repo.create(&draft("ada")).await.expect("insert");
        repo.create(&draft("bea")).await.expect("insert");

        let names: Vec<String> = repo
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|user| user.name().to_string())
            .collect();
        assert_eq!(names, vec!["ada", "bea"]);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_never_share_an_id() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handles: Vec<_> = (0..32)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(&draft(&format!("user{n}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let user = handle.await.expect("task joins").expect("insert");
            assert!(ids.insert(user.id()), "duplicate id {}", user.id());
        }
        assert_eq!(ids.len(), 32);
    }
}
