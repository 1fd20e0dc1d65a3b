//! Error handler for mailauth.

use sqlx::Error as SQLxError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthError>;

/// Enum representing backend-side errors.
///
/// A failed login is never one of these: the backend reports it by returning
/// `Ok(None)`. Errors are reserved for infrastructure failures, which
/// propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("SQL request failed: {0}")]
    Sql(#[from] SQLxError),

    #[error(transparent)]
    Crypto(#[from] crate::crypto::CryptoError),

    #[error("missing `{0}` entry on `config.yaml` file")]
    MissingConfig(&'static str),
}
