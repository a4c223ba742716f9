use dioxus::prelude::*;
use shared_types::{AppConfig, DataProvider, FeatureFlags, FixtureProvider, NavigationGate};
use std::rc::Rc;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod storage;
use auth::{use_auth, AuthState};

/// The module the user last picked from the menu. Ephemeral: never
/// persisted, and cleared on sign-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModuleSelection {
    pub requested: Signal<Option<String>>,
}

/// Read-only business data behind the module views.
#[derive(Clone)]
pub struct DataContext(pub Rc<dyn DataProvider>);

/// Hook to access the data provider.
pub fn use_data() -> Rc<dyn DataProvider> {
    use_context::<DataContext>().0
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    AppConfig::load_or_default(include_str!("../../../config.toml"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    let gate = use_hook(NavigationGate::standard);
    use_hook(|| {
        if let Err(e) = gate.validate() {
            tracing::error!("navigation table misconfigured: {e}");
        }
    });

    let flags: FeatureFlags = config.features.clone();
    use_context_provider(|| flags);
    use_context_provider(|| gate);
    use_context_provider(|| DataContext(Rc::new(FixtureProvider)));
    use_context_provider(|| ModuleSelection {
        requested: Signal::new(None),
    });
    use_context_provider(|| AuthState::new(&config));

    // Restore once at startup; the shell stays on the loading screen until
    // the session leaves `Initializing`.
    let auth = use_auth();
    use_future(move || {
        let store = auth.store();
        async move { store.restore().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            routes::Root {}
        }
    }
}
