//! User as stored on the directory.

use serde::{Deserialize, Serialize};

use crate::crypto::PasswordManager;

/// User as saved on database.
///
/// The backend treats it as read-only: records are created and mutated by
/// the directory owner, never here.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub created_at: chrono::NaiveDate,
}

impl User {
    /// Check a submitted secret against the stored credential.
    pub fn verify_credential(
        &self,
        pwd: &PasswordManager,
        secret: &str,
    ) -> bool {
        pwd.verify_password(secret, &self.password)
    }
}
