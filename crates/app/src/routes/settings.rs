use crate::components::PageHeader;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClock, LdFileText, LdSettings, LdShield};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label, Separator, SwitchField, TabContent, TabList, TabTrigger, Tabs, ToastOptions,
};

const TIMEZONES: [(&str, &str); 3] = [
    ("Asia/Singapore", "Singapore (GMT+8)"),
    ("Asia/Kuala_Lumpur", "Malaysia (GMT+8)"),
    ("Asia/Jakarta", "Jakarta (GMT+7)"),
];

const DATE_FORMATS: [&str; 3] = ["DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD"];

/// Agency-wide preferences edited on the settings page. Held in page
/// state only; saving acknowledges with a toast.
#[derive(Debug, Clone, PartialEq)]
struct SystemSettings {
    timezone: String,
    date_format: String,
    email_notifications: bool,
    push_notifications: bool,
    attendance_alerts: bool,
    two_factor: bool,
    session_timeout_minutes: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            timezone: "Asia/Singapore".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            email_notifications: true,
            push_notifications: true,
            attendance_alerts: true,
            two_factor: false,
            session_timeout_minutes: 30,
        }
    }
}

/// Parse the session timeout field. Blank, zero or non-numeric input keeps
/// the previous value.
fn parse_timeout(input: &str, current: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => minutes,
        _ => current,
    }
}

#[component]
pub fn Settings() -> Element {
    let toast = use_toast();
    let settings = use_signal(SystemSettings::default);

    rsx! {
        div { class: "module-page",
            PageHeader {
                title: "System Settings",
                subtitle: "Configure system preferences and security options",
                actions: rsx! {
                    Button {
                        onclick: move |_| {
                            tracing::debug!(settings = ?*settings.read(), "settings saved");
                            toast.success(
                                "Your settings have been saved successfully.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        "Save Changes"
                    }
                },
            }

            Tabs { default_value: "general", horizontal: true,
                TabList {
                    TabTrigger { value: "general", index: 0usize, "General" }
                    TabTrigger { value: "notifications", index: 1usize, "Notifications" }
                    TabTrigger { value: "security", index: 2usize, "Security" }
                    TabTrigger { value: "data", index: 3usize, "Data" }
                }
                TabContent { value: "general", index: 0usize,
                    GeneralSection { settings: settings }
                }
                TabContent { value: "notifications", index: 1usize,
                    NotificationSection { settings: settings }
                }
                TabContent { value: "security", index: 2usize,
                    SecuritySection { settings: settings }
                }
                TabContent { value: "data", index: 3usize,
                    DataSection {}
                }
            }
        }
    }
}

#[component]
fn GeneralSection(settings: Signal<SystemSettings>) -> Element {
    let mut settings = settings;
    let current = settings();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                    "System Preferences"
                }
                CardDescription { "Configure general system settings" }
            }
            CardContent {
                div { class: "form-grid",
                    div { class: "form-field",
                        Label { html_for: "timezone", "Timezone" }
                        select {
                            id: "timezone",
                            class: "select-native",
                            value: current.timezone.clone(),
                            onchange: move |evt: FormEvent| settings.write().timezone = evt.value(),
                            for (zone, caption) in TIMEZONES {
                                option { key: "{zone}", value: zone, "{caption}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "date-format", "Date Format" }
                        select {
                            id: "date-format",
                            class: "select-native",
                            value: current.date_format.clone(),
                            onchange: move |evt: FormEvent| settings.write().date_format = evt.value(),
                            for pattern in DATE_FORMATS {
                                option { key: "{pattern}", value: pattern, "{pattern}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationSection(settings: Signal<SystemSettings>) -> Element {
    let mut settings = settings;
    let flags: FeatureFlags = use_context();
    let current = settings();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    "Notification Settings"
                }
                CardDescription { "Configure how you receive notifications" }
            }
            CardContent {
                if !flags.notifications {
                    p { class: "hint", "The notification centre is disabled for this deployment." }
                }
                SwitchField {
                    label: "Email Notifications",
                    description: "Receive notifications via email",
                    checked: current.email_notifications,
                    on_change: move |on: bool| settings.write().email_notifications = on,
                }
                Separator {}
                SwitchField {
                    label: "Push Notifications",
                    description: "Browser push notifications",
                    checked: current.push_notifications,
                    on_change: move |on: bool| settings.write().push_notifications = on,
                }
                Separator {}
                SwitchField {
                    label: "Attendance Alerts",
                    description: "Late arrivals and absences",
                    checked: current.attendance_alerts,
                    on_change: move |on: bool| settings.write().attendance_alerts = on,
                }
            }
        }
    }
}

#[component]
fn SecuritySection(settings: Signal<SystemSettings>) -> Element {
    let mut settings = settings;
    let current = settings();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                    "Security Settings"
                }
                CardDescription { "Configure security and access controls" }
            }
            CardContent {
                SwitchField {
                    label: "Two-Factor Authentication",
                    description: "Require 2FA for all users",
                    checked: current.two_factor,
                    on_change: move |on: bool| settings.write().two_factor = on,
                }
                Separator {}
                div { class: "form-field",
                    Label { html_for: "session-timeout",
                        Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                        "Session Timeout (minutes)"
                    }
                    Input {
                        id: "session-timeout",
                        input_type: "number",
                        value: "{current.session_timeout_minutes}",
                        on_input: move |evt: FormEvent| {
                            let previous = settings.read().session_timeout_minutes;
                            settings.write().session_timeout_minutes = parse_timeout(&evt.value(), previous);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DataSection() -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Data Management" }
                CardDescription { "Export, import, and manage system data" }
            }
            CardContent {
                div { class: "record-buttons",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            toast.info("System data export has been initiated.".to_string(), ToastOptions::new());
                        },
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "Export Data"
                    }
                    Button { variant: ButtonVariant::Outline, "Import Data" }
                }
                p { class: "hint",
                    "Data operations may take several minutes. Please do not close the browser."
                }
            }
        }
    }
}
