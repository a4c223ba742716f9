use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AuthError, Identity, MemoryStorage, Role, SessionPhase};

#[tokio::test]
async fn test_session_survives_restart() {
    let storage = MemoryStorage::new();
    let first = common::restored_store(storage.clone()).await;
    let identity = first
        .sign_in("supervisor@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    drop(first);

    // A new store over the same slot plays the part of a page reload.
    let second = common::restored_store(storage).await;
    assert_eq!(second.identity(), Some(identity));
    assert_eq!(second.session().role(), Some(Role::Supervisor));
}

#[tokio::test]
async fn test_sign_out_is_not_undone_by_restart() {
    let storage = MemoryStorage::new();
    let first = common::restored_store(storage.clone()).await;
    first
        .sign_in("admin@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    first.sign_out().await;
    first.sign_out().await;

    let second = common::restored_store(storage.clone()).await;
    assert_eq!(second.session().phase(), &SessionPhase::Unauthenticated);
    assert_eq!(storage.value(), None);
}

#[tokio::test]
async fn test_persisted_value_is_identity_json() {
    let storage = MemoryStorage::new();
    let store = common::restored_store(storage.clone()).await;
    let identity = store
        .sign_in("guard@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();

    let raw: serde_json::Value = serde_json::from_str(&storage.value().unwrap()).unwrap();
    assert_eq!(raw["email"], "guard@security.sg");
    assert_eq!(raw["role"], "guard");

    let parsed: Identity = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed, identity);
}

#[tokio::test]
async fn test_corrupt_value_then_fresh_sign_in_overwrites_it() {
    let storage = MemoryStorage::with_value("{\"email\": 42");
    let store = common::restored_store(storage.clone()).await;
    assert_eq!(store.session().phase(), &SessionPhase::Unauthenticated);

    // Corrupt data is left in place until a successful sign-in replaces it.
    assert_eq!(storage.value().as_deref(), Some("{\"email\": 42"));

    let identity = store
        .sign_in("admin@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    let stored: Identity = serde_json::from_str(&storage.value().unwrap()).unwrap();
    assert_eq!(stored, identity);
}

#[tokio::test]
async fn test_observer_sees_every_transition_in_order() {
    let (store, log) = common::observed_store(MemoryStorage::new());
    store.restore().await;
    store.sign_in("", "whatever").await.unwrap_err();
    let identity = store
        .sign_in("admin@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    store.sign_out().await;

    let phases: Vec<SessionPhase> = log.borrow().iter().map(|s| s.phase().clone()).collect();
    assert_eq!(
        phases,
        vec![
            SessionPhase::Unauthenticated,
            SessionPhase::Authenticating,
            SessionPhase::Unauthenticated,
            SessionPhase::Authenticating,
            SessionPhase::Authenticated(identity),
            SessionPhase::Unauthenticated,
        ]
    );
}

#[tokio::test]
async fn test_pending_flag_only_while_authenticating_or_initializing() {
    let (store, log) = common::observed_store(MemoryStorage::new());
    assert!(store.is_pending());
    store.restore().await;
    store
        .sign_in("guard@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();

    let pending: Vec<bool> = log.borrow().iter().map(|s| s.is_pending()).collect();
    assert_eq!(pending, vec![false, true, false]);
}

#[tokio::test]
async fn test_second_sign_in_needs_sign_out_first() {
    let (store, first) = common::signed_in("admin@security.sg").await;
    assert_eq!(
        store.sign_in("guard@security.sg", common::DEMO_PASSWORD).await,
        Err(AuthError::AlreadySignedIn)
    );

    store.sign_out().await;
    let second = store
        .sign_in("guard@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.role, Role::Guard);
}

#[tokio::test]
async fn test_rejected_credentials_have_user_message() {
    let store = common::restored_store(MemoryStorage::new()).await;
    let err = store.sign_in("admin@security.sg", "").await.unwrap_err();
    assert_eq!(err, AuthError::AuthenticationFailed);
    assert!(!err.user_message().is_empty());
    assert!(!err.user_message().contains("demo123"));
}
