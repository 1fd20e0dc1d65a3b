//! Mailauth is an email-based authentication backend for pluggable login
//! systems.
//!
//! Given a submitted identifier and secret, it resolves an account by email
//! (case-insensitive) through a [`UserDirectory`] and delegates secret
//! verification to the stored credential. Everything else a login flow needs
//! (sessions, tokens, rate limiting, routing) belongs to the embedding
//! framework.

#[forbid(unsafe_code)]
#[deny(missing_docs, unused_mut)]
mod backend;
mod crypto;
mod directory;
mod user;

pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

pub use backend::{
    AuthContext, Authenticator, AuthenticatorStack, EmailAuthenticator,
};
pub use crypto::{CryptoError, PasswordManager};
pub use directory::{
    DEFAULT_POOL_SIZE, MemoryDirectory, PgDirectory, UserDirectory,
};
pub use user::User;

use error::AuthError;

/// Build an [`EmailAuthenticator`] backed by PostgreSQL from `config.yaml`.
pub async fn initialize() -> error::Result<EmailAuthenticator<PgDirectory>> {
    // read configuration file. let it in memory.
    let config = config::Configuration::default().read();

    let directory = match config.postgres {
        Some(ref config) => {
            PgDirectory::new(
                &config.address,
                &config
                    .username
                    .clone()
                    .unwrap_or(directory::DEFAULT_CREDENTIALS.into()),
                &config
                    .password
                    .clone()
                    .unwrap_or(directory::DEFAULT_CREDENTIALS.into()),
                &config
                    .database
                    .clone()
                    .unwrap_or(directory::DEFAULT_DATABASE_NAME.into()),
                config.pool_size.unwrap_or(directory::DEFAULT_POOL_SIZE),
            )
            .await?
        },
        None => {
            tracing::error!("missing `postgres` entry on `config.yaml` file");
            return Err(AuthError::MissingConfig("postgres"));
        },
    };

    let pwd = Arc::new(PasswordManager::new(config.argon2.clone())?);

    Ok(EmailAuthenticator::new(directory, pwd))
}
