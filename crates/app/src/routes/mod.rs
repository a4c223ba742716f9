pub mod attendance;
pub mod checklist;
pub mod clients;
pub mod compliance;
pub mod dashboard;
pub mod guard_tour;
pub mod incidents;
pub mod leave;
pub mod login;
pub mod notifications;
pub mod occurrence_book;
pub mod payroll;
pub mod reports;
pub mod settings;

use crate::auth::use_auth;
use crate::ModuleSelection;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdClipboardCheck, LdClock, LdDollarSign, LdLayoutDashboard, LdLogOut,
    LdMapPin, LdMenu, LdSettings, LdShield, LdShieldAlert, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, Identity, ModuleId, NavigationGate, SessionPhase};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Sidebar, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};

use login::Login;
use notifications::NotificationBell;

/// Site line under the header title when the identity has none.
const DEFAULT_SITE: &str = "Singapore Operations";

/// Top-level gate: loading screen while the session is pending, the sign-in
/// page without an identity, the dashboard shell with one.
#[component]
pub fn Root() -> Element {
    let auth = use_auth();
    let session = auth.session.read().clone();

    if matches!(session.phase(), SessionPhase::Initializing) {
        return rsx! {
            div { class: "auth-guard-loading",
                div { class: "spinner" }
                p { "Loading..." }
            }
        };
    }

    match session.identity().cloned() {
        Some(identity) => rsx! { AppLayout { identity } },
        None => rsx! { Login {} },
    }
}

fn module_icon(module: ModuleId) -> Element {
    match module {
        ModuleId::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        ModuleId::Attendance => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        ModuleId::Leave => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        ModuleId::Incidents => rsx! { Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 18, height: 18 } },
        ModuleId::GuardTour => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } },
        ModuleId::Payroll => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 } },
        ModuleId::OccurrenceBook => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        ModuleId::Checklist => rsx! { Icon::<LdClipboardCheck> { icon: LdClipboardCheck, width: 18, height: 18 } },
        ModuleId::Compliance => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        ModuleId::Clients => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        ModuleId::Reports => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        ModuleId::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Main layout: role-filtered sidebar, header, and the resolved module.
#[component]
fn AppLayout(identity: Identity) -> Element {
    let gate: NavigationGate = use_context();
    let flags: FeatureFlags = use_context();
    let mut selection: ModuleSelection = use_context();
    let auth = use_auth();

    let view = gate.navigate(identity.role, selection.requested.read().as_deref());
    let current = view.resolved;
    let site = identity.site.clone().unwrap_or_else(|| DEFAULT_SITE.to_string());
    let employee_id = identity.employee_id.clone().unwrap_or_default();
    let initials = identity.initials();
    let title = current.title();
    let short_title = title.split(' ').next().unwrap_or(title);

    let sign_out = move |_| {
        let store = auth.store();
        selection.requested.set(None);
        spawn(async move { store.sign_out().await });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                        div {
                            span { class: "sidebar-brand-name", "SecureOps SG" }
                            span { class: "sidebar-brand-tagline", "Security Management" }
                        }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for item in view.menu.iter().copied() {
                            SidebarMenuItem { key: "{item.id.as_str()}",
                                SidebarMenuButton {
                                    active: item.id == current,
                                    onclick: move |_| selection.requested.set(Some(item.id.as_str().to_string())),
                                    {module_icon(item.id)}
                                    span { class: "menu-label-full", "{item.label}" }
                                    span { class: "menu-label-short", "{item.short_label()}" }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        div { class: "sidebar-user-avatar", "{initials}" }
                        div { class: "sidebar-user-info",
                            p { class: "sidebar-user-name", "{identity.display_name}" }
                            p { class: "sidebar-user-role", "{identity.role.display_name()}" }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    div { class: "app-header-title",
                        h1 {
                            span { class: "menu-label-full", "{title}" }
                            span { class: "menu-label-short", "{short_title}" }
                        }
                        p { class: "app-header-subtitle", "{identity.display_name} • {site}" }
                    }
                    div { class: "app-header-actions",
                        if flags.notifications {
                            NotificationBell {}
                        }
                        div { class: "app-header-identity",
                            if !employee_id.is_empty() {
                                span { "ID: {employee_id}" }
                            }
                            Badge { variant: BadgeVariant::Secondary, "{identity.role.display_name()}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: "Sign out",
                            onclick: sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        }
                    }
                }

                div { class: "app-main",
                    ModuleView { module: current }
                }
            }
        }
    }
}

/// Renders one module. Each view reads the identity and data it needs from
/// context.
#[component]
fn ModuleView(module: ModuleId) -> Element {
    match module {
        ModuleId::Dashboard => rsx! { dashboard::Dashboard {} },
        ModuleId::Attendance => rsx! { attendance::Attendance {} },
        ModuleId::Leave => rsx! { leave::Leave {} },
        ModuleId::Incidents => rsx! { incidents::Incidents {} },
        ModuleId::GuardTour => rsx! { guard_tour::GuardTour {} },
        ModuleId::Payroll => rsx! { payroll::Payroll {} },
        ModuleId::OccurrenceBook => rsx! { occurrence_book::OccurrenceBook {} },
        ModuleId::Checklist => rsx! { checklist::Checklist {} },
        ModuleId::Compliance => rsx! { compliance::Compliance {} },
        ModuleId::Clients => rsx! { clients::Clients {} },
        ModuleId::Reports => rsx! { reports::Reports {} },
        ModuleId::Settings => rsx! { settings::Settings {} },
    }
}
