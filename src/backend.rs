//! Pluggable authentication backends.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::crypto::PasswordManager;
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::user::User;

/// Request-scoped context forwarded by the embedding framework.
///
/// Richer login flows may attach metadata here; backends are free to ignore
/// any of it. Unknown fields land in `extra` so callers never have to strip
/// them first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthContext {
    /// Peer address as reported by the framework.
    pub remote_addr: Option<String>,
    /// Correlation id of the login request.
    pub request_id: Option<String>,
    /// Any other field the framework forwards, accepted and discarded.
    #[serde(default, flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Contract every authentication strategy fulfils.
///
/// `Ok(None)` is the only way to report a failed login: missing identifier,
/// unknown account and wrong secret are deliberately indistinguishable so
/// callers cannot enumerate accounts. `Err` is reserved for infrastructure
/// failures and propagates unchanged.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Try to resolve the submitted credentials to an identity.
    async fn authenticate(
        &self,
        identifier: Option<&str>,
        secret: Option<&str>,
        ctx: &AuthContext,
    ) -> Result<Option<User>>;
}

/// Resolve identity by case-insensitive email, then delegate verification
/// to the stored credential.
pub struct EmailAuthenticator<D> {
    directory: D,
    pwd: Arc<PasswordManager>,
}

impl<D: UserDirectory> EmailAuthenticator<D> {
    /// Create a new [`EmailAuthenticator`].
    pub fn new(directory: D, pwd: Arc<PasswordManager>) -> Self {
        Self { directory, pwd }
    }

    /// Access the underlying directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }
}

#[async_trait]
impl<D: UserDirectory> Authenticator for EmailAuthenticator<D> {
    async fn authenticate(
        &self,
        identifier: Option<&str>,
        secret: Option<&str>,
        _ctx: &AuthContext,
    ) -> Result<Option<User>> {
        let Some(identifier) = identifier.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let matches = self.directory.find_by_email(identifier).await?;

        // Lowest id wins when the store holds duplicate emails.
        let Some(user) = matches.into_iter().min_by_key(|user| user.id)
        else {
            tracing::debug!("no account matches submitted email");
            return Ok(None);
        };

        let Some(secret) = secret else {
            return Ok(None);
        };

        if user.verify_credential(&self.pwd, secret) {
            tracing::debug!(user_id = user.id, "credentials accepted");
            Ok(Some(user))
        } else {
            tracing::debug!(user_id = user.id, "credential verification failed");
            Ok(None)
        }
    }
}

/// Ordered authentication strategies, tried until one yields an identity.
#[derive(Default)]
pub struct AuthenticatorStack {
    backends: Vec<Box<dyn Authenticator>>,
}

impl AuthenticatorStack {
    /// Create an empty [`AuthenticatorStack`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy at the end of the stack.
    pub fn register(mut self, backend: impl Authenticator + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }
}

#[async_trait]
impl Authenticator for AuthenticatorStack {
    async fn authenticate(
        &self,
        identifier: Option<&str>,
        secret: Option<&str>,
        ctx: &AuthContext,
    ) -> Result<Option<User>> {
        for backend in &self.backends {
            if let Some(user) =
                backend.authenticate(identifier, secret, ctx).await?
            {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}
