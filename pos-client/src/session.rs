//! Auth context
//!
//! Holds the session opened by the login view for the lifetime of the
//! process. Every `HttpClient` clone shares the same context, so a login
//! through one view authorizes requests from all of them.

use std::sync::Arc;

use shared::client::{LoginResponse, UserInfo};
use tokio::sync::RwLock;

/// Logged-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Unknown when the token came from configuration instead of a login
    pub user: Option<UserInfo>,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.token,
            user: Some(resp.user),
        }
    }
}

/// Shared, in-memory auth session
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with a bare token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Session {
                token: token.into(),
                user: None,
            }))),
        }
    }

    /// Store a session, replacing any previous one
    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// Drop the session
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn user(&self) -> Option<UserInfo> {
        self.inner.read().await.as_ref().and_then(|s| s.user.clone())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Name recorded in audit entries
    pub async fn operator(&self) -> String {
        self.user()
            .await
            .map(|u| u.username)
            .unwrap_or_else(|| "anonymous".to_string())
    }
}
