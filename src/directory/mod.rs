//! Directory of user records, queryable by email.

mod memory;
mod postgres;

pub use memory::*;
pub use postgres::*;

use async_trait::async_trait;

use crate::error::Result;
use crate::user::User;

/// External store of identity records.
///
/// The store is not required to be unique on email: duplicates are returned
/// in full and callers break ties on `id`. Uniqueness is a candidate
/// constraint to enforce upstream rather than here.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find every record whose `email` equals `email` case-insensitively,
    /// ordered by ascending `id`.
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>>;
}
