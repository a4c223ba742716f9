use thiserror::Error;

/// Outcome of a rejected sign-in.
///
/// None of the variants carry the submitted credentials.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("a sign-in is already in progress")]
    SignInInProgress,
    #[error("already signed in")]
    AlreadySignedIn,
}

impl AuthError {
    /// Text safe to show on the sign-in form.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::AuthenticationFailed => "Please check your credentials and try again.",
            AuthError::SignInInProgress => "Signing in, please wait.",
            AuthError::AlreadySignedIn => "You are already signed in.",
        }
    }
}

/// Failure reported by a [`crate::SessionStorage`] backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Internal session faults. Recovered inside the store, never shown to users.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("persisted session is malformed: {0}")]
    MalformedPersistedSession(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Problems found while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
