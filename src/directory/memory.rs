//! In-memory user directory.
//!
//! Backs tests and embedded deployments that have no PostgreSQL around.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::directory::UserDirectory;
use crate::error::Result;
use crate::user::User;

/// [`UserDirectory`] held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    // BTreeMap keeps iteration ordered by ascending id.
    users: RwLock<BTreeMap<i64, User>>,
}

impl MemoryDirectory {
    /// Create an empty [`MemoryDirectory`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record sharing its `id`.
    pub fn insert(&self, user: User) {
        let mut users =
            self.users.write().unwrap_or_else(|err| err.into_inner());
        users.insert(user.id, user);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>> {
        let email = email.to_lowercase();
        let users = self.users.read().unwrap_or_else(|err| err.into_inner());

        Ok(users
            .values()
            .filter(|user| user.email.to_lowercase() == email)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, email: &str) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: email.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_case_insensitive_lookup() {
        let directory = MemoryDirectory::new();
        directory.insert(record(1, "User@Example.com"));

        let matches =
            directory.find_by_email("user@EXAMPLE.com").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 1);
    }

    #[tokio::test]
    async fn test_ordered_by_ascending_id() {
        let directory = MemoryDirectory::new();
        directory.insert(record(9, "a@x.com"));
        directory.insert(record(3, "A@X.com"));
        directory.insert(record(5, "b@x.com"));

        let matches = directory.find_by_email("a@x.com").await.unwrap();
        let ids: Vec<i64> = matches.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[tokio::test]
    async fn test_insert_replaces_same_id() {
        let directory = MemoryDirectory::new();
        directory.insert(record(1, "old@x.com"));
        directory.insert(record(1, "new@x.com"));

        assert_eq!(directory.len(), 1);
        assert!(directory.find_by_email("old@x.com").await.unwrap().is_empty());
    }
}
