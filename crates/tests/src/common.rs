use shared_types::{
    DemoAuthenticator, Identity, MemoryStorage, NavigationGate, Role, Session, SessionStore,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type TestStore = SessionStore<MemoryStorage, DemoAuthenticator>;

pub const DEMO_PASSWORD: &str = "demo123";

/// A store over `storage` that has already finished restoring.
pub async fn restored_store(storage: MemoryStorage) -> TestStore {
    let store = SessionStore::new(storage, DemoAuthenticator);
    store.restore().await;
    store
}

/// A store whose every transition is appended to the returned log.
pub fn observed_store(storage: MemoryStorage) -> (TestStore, Rc<RefCell<Vec<Session>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let store = SessionStore::new(storage, DemoAuthenticator)
        .with_observer(move |session| sink.borrow_mut().push(session.clone()));
    (store, log)
}

/// Sign in as one of the demo accounts on a fresh, restored store.
pub async fn signed_in(email: &str) -> (TestStore, Identity) {
    let store = restored_store(MemoryStorage::new()).await;
    let identity = store
        .sign_in(email, DEMO_PASSWORD)
        .await
        .expect("demo sign-in succeeds");
    (store, identity)
}

pub fn gate() -> NavigationGate {
    let gate = NavigationGate::standard();
    gate.validate().expect("standard navigation table is valid");
    gate
}

/// Menu ids for `role`, in display order.
pub fn menu_ids(role: Role) -> Vec<&'static str> {
    gate()
        .visible_menu(role)
        .into_iter()
        .map(|item| item.id.as_str())
        .collect()
}
