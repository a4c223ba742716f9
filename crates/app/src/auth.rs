use crate::storage::{BrowserStorage, PacedAuthenticator};
use dioxus::prelude::*;
use shared_types::{
    AppConfig, Capability, Identity, NavigationGate, Role, Session, SessionStore,
};
use std::rc::Rc;

pub type AppSessionStore = SessionStore<BrowserStorage, PacedAuthenticator>;

/// Global authentication state.
///
/// `session` mirrors the store after every transition so components
/// re-render on sign-in and sign-out; the store itself performs them.
#[derive(Clone)]
pub struct AuthState {
    pub session: Signal<Session>,
    store: Rc<AppSessionStore>,
}

impl AuthState {
    pub fn new(config: &AppConfig) -> Self {
        let session = Signal::new(Session::default());
        let store = SessionStore::new(
            BrowserStorage::new(config.session.storage_key.clone()),
            PacedAuthenticator::new(config.session.sign_in_delay()),
        )
        .with_observer(move |snapshot| {
            let mut session = session;
            session.set(snapshot.clone());
        });

        Self {
            session,
            store: Rc::new(store),
        }
    }

    pub fn store(&self) -> Rc<AppSessionStore> {
        self.store.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.session.read().is_pending()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any.
pub fn use_role() -> Option<Role> {
    let auth = use_auth();
    let role = auth.session.read().role();
    role
}

/// Whether the signed-in user may take `capability`. False when signed out.
pub fn use_capability(capability: Capability) -> bool {
    let gate = use_context::<NavigationGate>();
    use_role()
        .map(|role| gate.allows(role, capability))
        .unwrap_or(false)
}

/// The signed-in identity, if any.
pub fn use_identity() -> Option<Identity> {
    use_auth().identity()
}
