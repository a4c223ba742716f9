//! Session store: the single source of truth for who is signed in.
//!
//! The store owns one durable storage slot and one authenticator. It moves
//! through `Initializing → Unauthenticated ⇄ Authenticating → Authenticated`
//! and back to `Unauthenticated` only through [`SessionStore::sign_out`].

use crate::error::{AuthError, SessionError, StorageError};
use crate::models::{Identity, Role};
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Before `restore` has run.
    #[default]
    Initializing,
    Unauthenticated,
    /// A sign-in is in flight.
    Authenticating,
    Authenticated(Identity),
}

/// Snapshot of the session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    phase: SessionPhase,
}

impl Session {
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// True while restoring or signing in. Sign-in controls stay disabled
    /// and role-gated content stays hidden while this holds.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Initializing | SessionPhase::Authenticating
        )
    }
}

/// Durable client-side storage slot for the serialized identity.
///
/// Each instance is bound to exactly one key.
#[allow(async_fn_in_trait)]
pub trait SessionStorage {
    async fn load(&self) -> Result<Option<String>, StorageError>;
    async fn save(&self, value: &str) -> Result<(), StorageError>;
    async fn remove(&self) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same slot, so a second store built
/// over a clone sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    /// Current raw contents of the slot.
    pub fn value(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut Option<String>) -> T) -> Result<T, StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| StorageError::Backend("memory slot poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl SessionStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        self.with_slot(|slot| slot.clone())
    }

    async fn save(&self, value: &str) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = Some(value.to_string()))
    }

    async fn remove(&self) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = None)
    }
}

/// Credential check behind `sign_in`.
///
/// Implementations must fail with [`AuthError::AuthenticationFailed`] on
/// rejected credentials and must not echo the password anywhere.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

/// A prefilled account offered on the sign-in page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        label: "Admin/Management",
        email: "admin@security.sg",
        password: "demo123",
    },
    DemoAccount {
        label: "Supervisor",
        email: "supervisor@security.sg",
        password: "demo123",
    },
    DemoAccount {
        label: "Security Guard",
        email: "guard@security.sg",
        password: "demo123",
    },
];

/// Local placeholder credential check.
///
/// Accepts any non-empty password and derives the role from the email.
/// This is not authentication; swap in a real [`Authenticator`] before
/// exposing the dashboard to anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

impl DemoAuthenticator {
    pub fn derive_identity(email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::AuthenticationFailed);
        }

        let (display_name, role) = match email.to_lowercase().as_str() {
            "admin@security.sg" => ("Admin User", Role::Admin),
            "guard@security.sg" => ("Security Guard", Role::Guard),
            "supervisor@security.sg" => ("Site Supervisor", Role::Supervisor),
            _ => ("Demo User", Role::Guard),
        };

        Ok(Identity {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, email.to_lowercase().as_bytes()).to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            role,
            employee_id: Some("EMP001".to_string()),
            department: Some("Security Operations".to_string()),
            site: Some("Orchard Road Mall".to_string()),
        })
    }
}

impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        Self::derive_identity(email, password)
    }
}

type Observer = Box<dyn Fn(&Session)>;

/// Holds the session and performs its transitions.
///
/// Single-threaded: overlapping `sign_in` calls on one store are rejected
/// with [`AuthError::SignInInProgress`] rather than queued.
pub struct SessionStore<S, A> {
    storage: S,
    authenticator: A,
    state: RefCell<Session>,
    observer: Option<Observer>,
}

impl<S: SessionStorage, A: Authenticator> SessionStore<S, A> {
    pub fn new(storage: S, authenticator: A) -> Self {
        Self {
            storage,
            authenticator,
            state: RefCell::new(Session::default()),
            observer: None,
        }
    }

    /// Register a callback run after every transition, e.g. to mirror the
    /// session into a reactive signal.
    pub fn with_observer(mut self, observer: impl Fn(&Session) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    fn transition(&self, phase: SessionPhase) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.phase = phase;
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }

    /// Load a previously persisted identity. Runs once; later calls are
    /// no-ops. Missing or corrupt storage leaves the session signed out.
    pub async fn restore(&self) {
        if !matches!(self.state.borrow().phase, SessionPhase::Initializing) {
            tracing::debug!("session already restored");
            return;
        }

        let identity = match self.read_persisted().await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("{e}; starting signed out");
                None
            }
        };

        match identity {
            Some(identity) => {
                tracing::debug!(email = %identity.email, role = %identity.role, "restored session");
                self.transition(SessionPhase::Authenticated(identity));
            }
            None => self.transition(SessionPhase::Unauthenticated),
        }
    }

    async fn read_persisted(&self) -> Result<Option<Identity>, SessionError> {
        let Some(raw) = self.storage.load().await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Check credentials and, on success, persist and publish the identity.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        match &self.state.borrow().phase {
            SessionPhase::Unauthenticated => {}
            SessionPhase::Initializing | SessionPhase::Authenticating => {
                return Err(AuthError::SignInInProgress)
            }
            SessionPhase::Authenticated(_) => return Err(AuthError::AlreadySignedIn),
        }

        self.transition(SessionPhase::Authenticating);
        let mut pending = PendingSignIn { store: self, settled: false };

        let outcome = self.authenticator.authenticate(email, password).await;
        pending.settled = true;

        let identity = match outcome {
            Ok(identity) => identity,
            Err(e) => {
                tracing::info!(email = %email.trim(), "sign-in rejected");
                self.transition(SessionPhase::Unauthenticated);
                return Err(e);
            }
        };

        // Settled before the write: storage never holds an identity the
        // store has already dropped.
        self.transition(SessionPhase::Authenticated(identity.clone()));
        if let Err(e) = self.persist(&identity).await {
            tracing::warn!("failed to persist session: {e}");
        }
        tracing::info!(email = %identity.email, role = %identity.role, "signed in");
        Ok(identity)
    }

    async fn persist(&self, identity: &Identity) -> Result<(), SessionError> {
        let raw = serde_json::to_string(identity)?;
        self.storage.save(&raw).await?;
        Ok(())
    }

    /// Clear the identity and erase the persisted copy. A no-op when not
    /// signed in.
    pub async fn sign_out(&self) {
        if !self.state.borrow().is_authenticated() {
            tracing::debug!("sign-out ignored, not signed in");
            return;
        }

        self.transition(SessionPhase::Unauthenticated);
        if let Err(e) = self.storage.remove().await {
            tracing::warn!("failed to erase persisted session: {e}");
        }
        tracing::info!("signed out");
    }
}

/// Returns the store to `Unauthenticated` if a sign-in future is dropped
/// before the authenticator settles.
struct PendingSignIn<'a, S: SessionStorage, A: Authenticator> {
    store: &'a SessionStore<S, A>,
    settled: bool,
}

impl<S: SessionStorage, A: Authenticator> Drop for PendingSignIn<'_, S, A> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("sign-in abandoned before completion");
            self.store.transition(SessionPhase::Unauthenticated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;
    use std::time::Duration;

    fn store(storage: MemoryStorage) -> SessionStore<MemoryStorage, DemoAuthenticator> {
        SessionStore::new(storage, DemoAuthenticator)
    }

    /// Yields once before delegating, so overlapping calls interleave.
    struct YieldingAuthenticator;

    impl Authenticator for YieldingAuthenticator {
        async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
            tokio::task::yield_now().await;
            DemoAuthenticator::derive_identity(email, password)
        }
    }

    struct NeverAuthenticator;

    impl Authenticator for NeverAuthenticator {
        async fn authenticate(&self, _: &str, _: &str) -> Result<Identity, AuthError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(AuthError::AuthenticationFailed)
        }
    }

    /// Writes the slot, then stalls as if the backend never acknowledged.
    struct StallingStorage(MemoryStorage);

    impl SessionStorage for StallingStorage {
        async fn load(&self) -> Result<Option<String>, StorageError> {
            self.0.load().await
        }
        async fn save(&self, value: &str) -> Result<(), StorageError> {
            self.0.save(value).await?;
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
        async fn remove(&self) -> Result<(), StorageError> {
            self.0.remove().await
        }
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        async fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("no window".into()))
        }
        async fn save(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }
        async fn remove(&self) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }
    }

    #[test]
    fn derive_identity_known_accounts() {
        let admin = DemoAuthenticator::derive_identity("admin@security.sg", "demo123").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.display_name, "Admin User");

        let guard = DemoAuthenticator::derive_identity("guard@security.sg", "x").unwrap();
        assert_eq!(guard.role, Role::Guard);
        assert_eq!(guard.display_name, "Security Guard");

        let sup = DemoAuthenticator::derive_identity("Supervisor@Security.sg", "x").unwrap();
        assert_eq!(sup.role, Role::Supervisor);
        assert_eq!(sup.display_name, "Site Supervisor");
    }

    #[test]
    fn derive_identity_unknown_email_is_demo_guard() {
        let user = DemoAuthenticator::derive_identity("someone@else.sg", "pw").unwrap();
        assert_eq!(user.role, Role::Guard);
        assert_eq!(user.display_name, "Demo User");
        assert_eq!(user.site.as_deref(), Some("Orchard Road Mall"));
        assert_eq!(user.employee_id.as_deref(), Some("EMP001"));
    }

    #[test]
    fn derive_identity_rejects_blank_credentials() {
        assert_eq!(
            DemoAuthenticator::derive_identity("", "pw"),
            Err(AuthError::AuthenticationFailed)
        );
        assert_eq!(
            DemoAuthenticator::derive_identity("   ", "pw"),
            Err(AuthError::AuthenticationFailed)
        );
        assert_eq!(
            DemoAuthenticator::derive_identity("admin@security.sg", ""),
            Err(AuthError::AuthenticationFailed)
        );
    }

    #[test]
    fn derive_identity_id_is_stable_per_email() {
        let a = DemoAuthenticator::derive_identity("admin@security.sg", "1").unwrap();
        let b = DemoAuthenticator::derive_identity("ADMIN@security.sg", "2").unwrap();
        let c = DemoAuthenticator::derive_identity("guard@security.sg", "1").unwrap();
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn new_store_is_initializing_and_pending() {
        let store = store(MemoryStorage::new());
        assert_eq!(store.session().phase(), &SessionPhase::Initializing);
        assert!(store.is_pending());
        assert_eq!(store.identity(), None);
    }

    #[tokio::test]
    async fn restore_empty_storage_is_signed_out() {
        let store = store(MemoryStorage::new());
        store.restore().await;
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
        assert!(!store.is_pending());
    }

    #[tokio::test]
    async fn restore_corrupt_storage_is_signed_out() {
        let store = store(MemoryStorage::with_value("{not json"));
        store.restore().await;
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn restore_with_unreadable_storage_is_signed_out() {
        let store = SessionStore::new(BrokenStorage, DemoAuthenticator);
        store.restore().await;
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn restore_runs_once() {
        let storage = MemoryStorage::new();
        let store = store(storage.clone());
        store.restore().await;
        let identity = store.sign_in("admin@security.sg", "demo123").await.unwrap();
        store.restore().await;
        assert_eq!(store.identity(), Some(identity));
    }

    #[tokio::test]
    async fn sign_in_before_restore_is_rejected() {
        let store = store(MemoryStorage::new());
        assert_eq!(
            store.sign_in("admin@security.sg", "demo123").await,
            Err(AuthError::SignInInProgress)
        );
        assert_eq!(store.session().phase(), &SessionPhase::Initializing);
    }

    #[tokio::test]
    async fn sign_in_persists_identity() {
        let storage = MemoryStorage::new();
        let store = store(storage.clone());
        store.restore().await;

        let identity = store.sign_in("admin@security.sg", "demo123").await.unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(store.session().role(), Some(Role::Admin));
        assert!(!store.is_pending());

        let raw = storage.value().expect("identity persisted");
        let stored: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, identity);
    }

    #[tokio::test]
    async fn failed_sign_in_stays_signed_out() {
        let storage = MemoryStorage::new();
        let store = store(storage.clone());
        store.restore().await;

        let err = store.sign_in("admin@security.sg", "").await.unwrap_err();
        assert_eq!(err, AuthError::AuthenticationFailed);
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
        assert_eq!(storage.value(), None);
    }

    #[tokio::test]
    async fn sign_in_while_signed_in_is_rejected() {
        let store = store(MemoryStorage::new());
        store.restore().await;
        let first = store.sign_in("admin@security.sg", "demo123").await.unwrap();
        assert_eq!(
            store.sign_in("guard@security.sg", "demo123").await,
            Err(AuthError::AlreadySignedIn)
        );
        assert_eq!(store.identity(), Some(first));
    }

    #[tokio::test]
    async fn sign_in_survives_storage_failure() {
        let store = SessionStore::new(BrokenStorage, DemoAuthenticator);
        store.restore().await;
        let identity = store.sign_in("guard@security.sg", "demo123").await.unwrap();
        assert_eq!(store.identity(), Some(identity));
        store.sign_out().await;
        assert_eq!(store.identity(), None);
    }

    #[tokio::test]
    async fn overlapping_sign_in_commits_one_outcome() {
        let store = SessionStore::new(MemoryStorage::new(), YieldingAuthenticator);
        store.restore().await;

        let (first, second) = tokio::join!(
            store.sign_in("admin@security.sg", "demo123"),
            store.sign_in("guard@security.sg", "demo123"),
        );

        let first = first.unwrap();
        assert_eq!(second, Err(AuthError::SignInInProgress));
        assert_eq!(store.identity(), Some(first));
    }

    #[tokio::test]
    async fn abandoned_sign_in_returns_to_signed_out() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), NeverAuthenticator);
        store.restore().await;

        let result = tokio::time::timeout(
            Duration::from_millis(5),
            store.sign_in("admin@security.sg", "demo123"),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
        assert_eq!(storage.value(), None);
    }

    #[tokio::test]
    async fn sign_in_dropped_mid_save_matches_storage_after_restart() {
        let slot = MemoryStorage::new();
        let store = SessionStore::new(StallingStorage(slot.clone()), DemoAuthenticator);
        store.restore().await;

        let result = tokio::time::timeout(
            Duration::from_millis(5),
            store.sign_in("admin@security.sg", "demo123"),
        )
        .await;
        assert!(result.is_err());

        let live = store.identity();
        assert_eq!(live.as_ref().map(|i| i.role), Some(Role::Admin));

        let restarted = self::store(slot);
        restarted.restore().await;
        assert_eq!(restarted.identity(), live);
    }

    #[tokio::test]
    async fn sign_out_clears_identity_and_storage() {
        let storage = MemoryStorage::new();
        let store = store(storage.clone());
        store.restore().await;
        store.sign_in("admin@security.sg", "demo123").await.unwrap();

        store.sign_out().await;
        assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);
        assert_eq!(storage.value(), None);
    }

    #[tokio::test]
    async fn sign_out_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = store(storage.clone());
        store.restore().await;
        store.sign_in("admin@security.sg", "demo123").await.unwrap();

        store.sign_out().await;
        let once = store.session();
        store.sign_out().await;
        assert_eq!(store.session(), once);
        assert_eq!(storage.value(), None);
    }

    #[tokio::test]
    async fn observer_sees_every_transition() {
        let seen: Rc<RefCell<Vec<SessionPhase>>> = Rc::default();
        let sink = seen.clone();
        let store = SessionStore::new(MemoryStorage::new(), DemoAuthenticator)
            .with_observer(move |s| sink.borrow_mut().push(s.phase().clone()));

        store.restore().await;
        let identity = store.sign_in("guard@security.sg", "demo123").await.unwrap();
        store.sign_out().await;

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionPhase::Unauthenticated,
                SessionPhase::Authenticating,
                SessionPhase::Authenticated(identity),
                SessionPhase::Unauthenticated,
            ]
        );
    }
}
