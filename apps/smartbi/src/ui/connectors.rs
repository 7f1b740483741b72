use dioxus::prelude::*;
use tracing::info;

use crate::fixtures::connectors::connector_templates;
use crate::models::{Connector, ConnectorStatus};
use crate::services::format::{now_ms, thousands, time_ago};
use crate::state::{use_app_actions, use_app_state, AppActions};
use crate::ui::widgets::{badge, panel_header, stat_card};

#[component]
pub fn ConnectorsPanel() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let board = snapshot.connectors.clone();
    let can_manage = snapshot
        .session
        .role()
        .map_or(false, |role| role.can_manage_connectors());
    drop(snapshot);

    let now = now_ms();

    rsx! {
        section { class: "space-y-6",
            div { class: "flex items-start justify-between",
                {panel_header("Conectores de dados", "Fontes ligadas ao assistente e o seu estado de sincronização.")}
                if can_manage {
                    button {
                        class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white",
                        onclick: move |_| actions.set_connector_picker(true),
                        "Adicionar conector"
                    }
                }
            }

            div { class: "grid gap-4 md:grid-cols-4",
                {stat_card("Conectados", board.connected_count().to_string(), "", "text-green-600")}
                {stat_card("Total", board.connectors.len().to_string(), "", "")}
                {stat_card("Com erro", board.error_count().to_string(), "", "text-red-600")}
                {stat_card("Registos", thousands(board.total_records()), "em fontes conectadas", "text-blue-600")}
            }

            if can_manage && board.show_picker {
                {template_picker(actions)}
            }

            div { class: "grid gap-4 lg:grid-cols-2",
                for connector in board.connectors.iter() {
                    {connector_card(connector, now, can_manage, actions)}
                }
            }
        }
    }
}

fn connector_card(connector: &Connector, now: i64, can_manage: bool, actions: AppActions) -> Element {
    let id = connector.id.clone();
    let status = connector.status;
    let synced = time_ago(now, connector.last_sync_ms);
    let toggle_label = if connector.is_active { "Desligar" } else { "Ligar" };

    rsx! {
        article {
            key: "{connector.id}",
            class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
            header { class: "flex items-start justify-between",
                div {
                    h3 { class: "text-sm font-semibold", "{connector.name}" }
                    p { class: "text-[11px] text-slate-500", "{connector.kind}" }
                }
                {badge(status.label(), status.badge_class())}
            }
            p { class: "text-xs text-slate-600 dark:text-slate-300", "{connector.description}" }
            div { class: "flex flex-wrap gap-1",
                for capability in connector.capabilities.iter() {
                    span {
                        key: "{capability}",
                        class: "rounded bg-slate-100 px-2 py-0.5 text-[11px] text-slate-600 dark:bg-slate-800 dark:text-slate-300",
                        "{capability}"
                    }
                }
            }
            div { class: "flex flex-wrap gap-4 text-[11px] text-slate-500",
                span { "Última sincronização: {synced}" }
                span { "{connector.record_count}" }
                if let Some(endpoint) = connector.connection_string.as_ref() {
                    span { class: "font-mono", "{endpoint}" }
                }
            }
            if status == ConnectorStatus::Error {
                p { class: "rounded bg-red-50 p-2 text-[11px] text-red-700",
                    "Falha na ligação. Verifique as credenciais e a conectividade."
                }
            }
            div { class: "flex gap-2",
                button {
                    class: "rounded border border-slate-300 px-3 py-1 text-xs",
                    onclick: move |_| actions.toggle_connector(&id),
                    "{toggle_label}"
                }
                if can_manage {
                    button {
                        class: "rounded border border-slate-300 px-3 py-1 text-xs",
                        onclick: {
                            let id = connector.id.clone();
                            move |_| info!(connector = %id, "configure requested")
                        },
                        "Configurar"
                    }
                    button {
                        class: "rounded border border-slate-300 px-3 py-1 text-xs disabled:opacity-50",
                        disabled: !connector.is_active,
                        onclick: {
                            let id = connector.id.clone();
                            move |_| info!(connector = %id, "sync requested")
                        },
                        "Sincronizar"
                    }
                }
            }
        }
    }
}

fn template_picker(actions: AppActions) -> Element {
    rsx! {
        div { class: "space-y-3 rounded-lg border border-blue-200 bg-blue-50 p-4 dark:border-blue-900 dark:bg-blue-950",
            h3 { class: "text-sm font-semibold", "Escolha o tipo de conector" }
            div { class: "grid gap-2 md:grid-cols-3",
                for template in connector_templates() {
                    button {
                        key: "{template.name}",
                        class: "rounded-md border border-slate-200 bg-white p-3 text-left text-sm hover:border-blue-400 dark:border-slate-800 dark:bg-slate-900",
                        onclick: move |_| {
                            info!(template = template.name, kind = template.kind, "connector template chosen");
                            actions.set_connector_picker(false);
                        },
                        p { class: "font-medium", "{template.name}" }
                        p { class: "text-[11px] text-slate-500", "{template.kind}" }
                    }
                }
            }
            button {
                class: "rounded border border-slate-300 px-3 py-1 text-xs",
                onclick: move |_| actions.set_connector_picker(false),
                "Cancelar"
            }
        }
    }
}
