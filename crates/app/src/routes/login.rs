use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, DEMO_ACCOUNTS};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
    Separator, ToastOptions,
};

/// Sign-in page. Submits through the session store; the form stays
/// editable after a rejection and is disabled only while a sign-in is
/// pending.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let pending = auth.is_pending();

    let handle_sign_in = move |evt: FormEvent| {
        let store = auth.store();
        async move {
            evt.prevent_default();
            match store.sign_in(&email(), &password()).await {
                Ok(identity) => {
                    toast.success(
                        format!("Welcome to SecureOps Singapore, {}", identity.display_name),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    toast.error(
                        format!("Login failed. {}", e.user_message()),
                        ToastOptions::new(),
                    );
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-logo",
                        Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                    }
                    CardTitle { "SecureOps Singapore" }
                    CardDescription { "Security Agency Management System" }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_sign_in,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email Address" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "Enter your email",
                                autocomplete: "username",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                autocomplete: "current-password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            class: "auth-submit",
                            submit: true,
                            disabled: pending,
                            if pending {
                                span { class: "spinner spinner-inline" }
                                "Signing In..."
                            } else {
                                "Sign In"
                            }
                        }
                    }

                    if flags.demo_accounts {
                        Separator { class: "auth-divider" }
                        div { class: "demo-accounts",
                            p { class: "demo-accounts-title", "Demo Accounts:" }
                            for account in DEMO_ACCOUNTS.iter() {
                                button {
                                    key: "{account.email}",
                                    r#type: "button",
                                    class: "demo-account",
                                    disabled: pending,
                                    onclick: move |_| {
                                        email.set(account.email.to_string());
                                        password.set(account.password.to_string());
                                    },
                                    div { class: "demo-account-role", "{account.label}" }
                                    div { class: "demo-account-email", "{account.email}" }
                                }
                            }
                            p { class: "demo-accounts-hint", "Click to auto-fill credentials" }
                        }
                    }
                }
            }
        }
    }
}
