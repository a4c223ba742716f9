//! Platform adapters behind the session store: the browser storage slot
//! and the paced placeholder authenticator.

use dioxus::prelude::*;
use shared_types::{
    AuthError, Authenticator, DemoAuthenticator, Identity, SessionStorage, StorageError,
};
use std::time::Duration;

/// One `localStorage` key, reached through the webview's JS bridge.
///
/// Works the same on web, desktop and mobile since all three render into a
/// webview with `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key rendered as a JS string literal.
    fn key_literal(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.key).map_err(|e| StorageError::Backend(e.to_string()))
    }
}

fn eval_failed(e: impl std::fmt::Display) -> StorageError {
    StorageError::Unavailable(e.to_string())
}

impl SessionStorage for BrowserStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        let key = self.key_literal()?;
        document::eval(&format!("return window.localStorage.getItem({key});"))
            .join::<Option<String>>()
            .await
            .map_err(eval_failed)
    }

    async fn save(&self, value: &str) -> Result<(), StorageError> {
        let key = self.key_literal()?;
        let value =
            serde_json::to_string(value).map_err(|e| StorageError::Backend(e.to_string()))?;
        document::eval(&format!(
            "window.localStorage.setItem({key}, {value}); return true;"
        ))
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(eval_failed)
    }

    async fn remove(&self) -> Result<(), StorageError> {
        let key = self.key_literal()?;
        document::eval(&format!(
            "window.localStorage.removeItem({key}); return true;"
        ))
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(eval_failed)
    }
}

/// [`DemoAuthenticator`] with a fixed delay in front, so the pending state
/// is visible on the sign-in form.
#[derive(Debug, Clone, Copy)]
pub struct PacedAuthenticator {
    delay: Duration,
}

impl PacedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Authenticator for PacedAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let ms = self.delay.as_millis();
        if ms > 0 {
            let waited = document::eval(&format!(
                "await new Promise((resolve) => setTimeout(resolve, {ms})); return true;"
            ))
            .join::<bool>()
            .await;
            if let Err(e) = waited {
                tracing::debug!("sign-in delay skipped: {e}");
            }
        }
        DemoAuthenticator::derive_identity(email, password)
    }
}
