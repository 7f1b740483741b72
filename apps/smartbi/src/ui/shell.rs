use dioxus::prelude::*;

use crate::hooks::session::{use_session_restore, use_session_runner};
use crate::models::Product;
use crate::state::{use_app_actions, use_app_state, Tab, Theme};
use crate::ui::admin::AdminPanel;
use crate::ui::connectors::ConnectorsPanel;
use crate::ui::export::ExportPanel;
use crate::ui::history::HistoryPanel;
use crate::ui::insights::InsightsPanel;
use crate::ui::login::LoginView;
use crate::ui::notifications::NotificationCenter;
use crate::ui::query::QueryPanel;
use crate::ui::smartquote::SmartQuoteWorkspace;

/// Chooses between the restore placeholder, the login view and the
/// product workspace.
#[component]
pub fn ProductGate() -> Element {
    use_session_restore();

    let app_state = use_app_state();
    let snapshot = app_state.read();
    let theme = snapshot.theme;
    let product = snapshot.product;
    let restoring = snapshot.session.is_restoring;
    let signed_in = snapshot.session.user.is_some();
    drop(snapshot);

    let body = if restoring {
        rsx! {
            div { class: "flex min-h-screen items-center justify-center",
                p { class: "text-sm text-slate-500", "A carregar sessão..." }
            }
        }
    } else if !signed_in {
        rsx! { LoginView {} }
    } else {
        match product {
            Product::SmartBi => rsx! { SmartBiWorkspace {} },
            Product::SmartQuote => rsx! { SmartQuoteWorkspace {} },
        }
    };

    rsx! {
        div { class: theme.root_class(),
            {body}
            NotificationCenter {}
        }
    }
}

#[component]
pub fn AppHeader() -> Element {
    let actions = use_app_actions();
    let runner = use_session_runner();
    let app_state = use_app_state();
    let snapshot = app_state.read();
    let product = snapshot.product;
    let theme = snapshot.theme;
    let Some(user) = snapshot.session.user.clone() else {
        return rsx! {};
    };
    drop(snapshot);

    let role_label = user.role.label(product);
    let theme_label = match theme {
        Theme::Light => "Modo escuro",
        Theme::Dark => "Modo claro",
    };

    rsx! {
        header { class: "flex items-center justify-between border-b border-slate-200 bg-white px-6 py-3 dark:border-slate-800 dark:bg-slate-900",
            div { class: "flex flex-col",
                h1 { class: "text-lg font-bold", "{product.title()}" }
                p { class: "text-[11px] text-slate-500", "{product.tagline()}" }
            }
            div { class: "flex items-center gap-3",
                button {
                    class: "rounded border border-slate-300 px-3 py-1 text-xs",
                    onclick: move |_| actions.toggle_theme(),
                    "{theme_label}"
                }
                span { class: "rounded-full bg-blue-100 px-2 py-0.5 text-[11px] font-semibold text-blue-800",
                    "{role_label}"
                }
                div { class: "text-right",
                    p { class: "text-sm font-medium", "{user.name}" }
                    p { class: "text-[11px] text-slate-500", "{user.email}" }
                }
                button {
                    class: "rounded bg-slate-900 px-3 py-1 text-xs font-semibold text-white dark:bg-slate-100 dark:text-slate-900",
                    onclick: move |_| runner.logout(),
                    "Sair"
                }
            }
        }
    }
}

#[component]
fn SmartBiWorkspace() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();
    let snapshot = app_state.read();
    let Some(role) = snapshot.session.role() else {
        return rsx! {};
    };
    let active = snapshot.active_tab();
    drop(snapshot);

    let content = match active {
        Tab::Query => rsx! { QueryPanel {} },
        Tab::History => rsx! { HistoryPanel {} },
        Tab::Connectors => rsx! { ConnectorsPanel {} },
        Tab::Insights => rsx! { InsightsPanel {} },
        Tab::Export => rsx! { ExportPanel {} },
        Tab::Admin => rsx! { AdminPanel {} },
    };

    rsx! {
        AppHeader {}
        div { class: "flex",
            nav { class: "w-56 shrink-0 space-y-1 border-r border-slate-200 p-4 dark:border-slate-800",
                for tab in Tab::visible_for(role) {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active {
                            "w-full rounded-md bg-blue-600 px-3 py-2 text-left text-sm font-medium text-white"
                        } else {
                            "w-full rounded-md px-3 py-2 text-left text-sm text-slate-600 hover:bg-slate-100 dark:text-slate-300 dark:hover:bg-slate-800"
                        },
                        onclick: move |_| actions.set_tab(tab),
                        "{tab.label()}"
                    }
                }
            }
            main { class: "flex-1 space-y-6 p-6", {content} }
        }
    }
}
