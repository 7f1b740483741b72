use dioxus::prelude::*;
use tracing::info;

use crate::fixtures::admin::{
    admin_connectors, admin_users, resource_usage, role_shares, system_alerts, system_stats,
    usage_data,
};
use crate::models::{AlertLevel, Product};
use crate::services::format::thousands;
use crate::ui::widgets::{badge, bar_row, panel_header, stat_card};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Users,
    Connectors,
    System,
    Settings,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Connectors,
        AdminTab::System,
        AdminTab::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Visão geral",
            Self::Users => "Utilizadores",
            Self::Connectors => "Conectores",
            Self::System => "Sistema",
            Self::Settings => "Configurações",
        }
    }
}

#[component]
pub fn AdminPanel() -> Element {
    let mut tab = use_signal(|| AdminTab::Overview);
    let active = tab();

    let body = match active {
        AdminTab::Overview => overview(),
        AdminTab::Users => users(),
        AdminTab::Connectors => connectors(),
        AdminTab::System => system(),
        AdminTab::Settings => rsx! { SettingsTab {} },
    };

    rsx! {
        section { class: "space-y-6",
            {panel_header("Administração", "Estado do sistema, utilizadores e configuração.")}
            nav { class: "flex gap-2 border-b border-slate-200 dark:border-slate-800",
                for candidate in AdminTab::ALL {
                    button {
                        key: "{candidate.label()}",
                        class: if candidate == active {
                            "border-b-2 border-blue-600 px-3 py-2 text-sm font-medium text-blue-600"
                        } else {
                            "px-3 py-2 text-sm text-slate-500 hover:text-slate-800"
                        },
                        onclick: move |_| tab.set(candidate),
                        "{candidate.label()}"
                    }
                }
            }
            {body}
        }
    }
}

fn alert_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "border-blue-200 bg-blue-50 text-blue-800",
        AlertLevel::Warning => "border-yellow-200 bg-yellow-50 text-yellow-800",
        AlertLevel::Error => "border-red-200 bg-red-50 text-red-800",
    }
}

fn overview() -> Element {
    let stats = system_stats();
    let usage = usage_data();
    let max_queries = usage.iter().map(|p| p.queries).max().unwrap_or(0);

    rsx! {
        div { class: "space-y-6",
            div { class: "grid gap-4 md:grid-cols-3 xl:grid-cols-6",
                {stat_card("Utilizadores", thousands(stats.total_users as u64), "", "")}
                {stat_card("Ativos", thousands(stats.active_users as u64), "", "text-green-600")}
                {stat_card("Consultas", thousands(stats.total_queries as u64), "", "text-blue-600")}
                {stat_card("Resposta média", stats.avg_response_time.to_string(), "", "")}
                {stat_card("Uptime", stats.uptime.to_string(), "", "text-green-600")}
                {stat_card("Dados processados", stats.data_processed.to_string(), "", "")}
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    h3 { class: "text-sm font-semibold", "Utilização mensal" }
                    for point in usage.iter() {
                        div { key: "{point.month}",
                            {bar_row(
                                point.month,
                                point.queries,
                                max_queries,
                                format!("{} consultas · {} utilizadores", point.queries, point.users),
                                "bg-blue-500",
                            )}
                        }
                    }
                }
                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    h3 { class: "text-sm font-semibold", "Distribuição por função" }
                    for share in role_shares() {
                        div { key: "{share.name}",
                            {bar_row(share.name, share.value, 100, format!("{}%", share.value), "bg-emerald-500")}
                        }
                    }
                }
            }
            div { class: "space-y-2",
                h3 { class: "text-sm font-semibold", "Alertas do sistema" }
                for alert in system_alerts() {
                    div {
                        key: "{alert.id}",
                        class: format!("flex items-center justify-between rounded-md border p-3 text-xs {}", alert_class(alert.level)),
                        span { "{alert.title}" }
                        span { class: "opacity-70", "{alert.time}" }
                    }
                }
            }
        }
    }
}

fn users() -> Element {
    rsx! {
        div { class: "overflow-x-auto rounded-lg border border-slate-200 dark:border-slate-800",
            table { class: "min-w-full text-left text-xs",
                thead {
                    tr { class: "border-b border-slate-200 dark:border-slate-800",
                        th { class: "px-3 py-2", "Nome" }
                        th { class: "px-3 py-2", "Email" }
                        th { class: "px-3 py-2", "Função" }
                        th { class: "px-3 py-2", "Estado" }
                        th { class: "px-3 py-2", "Último acesso" }
                        th { class: "px-3 py-2", "Consultas" }
                    }
                }
                tbody {
                    for user in admin_users() {
                        tr { key: "{user.id}", class: "border-b border-slate-100 dark:border-slate-800",
                            td { class: "px-3 py-2 font-medium", "{user.name}" }
                            td { class: "px-3 py-2", "{user.email}" }
                            td { class: "px-3 py-2", {user.role.label(Product::SmartBi)} }
                            td { class: "px-3 py-2", {badge(user.status.label(), user.status.badge_class())} }
                            td { class: "px-3 py-2", "{user.last_login}" }
                            td { class: "px-3 py-2", "{user.queries}" }
                        }
                    }
                }
            }
        }
    }
}

fn connectors() -> Element {
    rsx! {
        div { class: "grid gap-3 md:grid-cols-2",
            for connector in admin_connectors() {
                div {
                    key: "{connector.id}",
                    class: "space-y-1 rounded-md border border-slate-200 p-3 text-xs dark:border-slate-800",
                    div { class: "flex items-center justify-between",
                        span { class: "text-sm font-medium", "{connector.name}" }
                        {badge(connector.status.label(), connector.status.badge_class())}
                    }
                    p { class: "text-slate-500", "{connector.kind}" }
                    p { class: "text-slate-500", "Sincronizado {connector.last_sync} · {connector.records} registos" }
                }
            }
        }
    }
}

fn system() -> Element {
    rsx! {
        div { class: "space-y-6",
            div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                h3 { class: "text-sm font-semibold", "Recursos" }
                for (name, used) in resource_usage() {
                    div { key: "{name}",
                        {bar_row(
                            name,
                            used as u32,
                            100,
                            format!("{used}%"),
                            if used >= 70 { "bg-amber-500" } else { "bg-green-500" },
                        )}
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                for action in ["Reiniciar serviços", "Limpar cache", "Executar backup"] {
                    button {
                        key: "{action}",
                        class: "rounded border border-slate-300 px-3 py-1 text-xs",
                        onclick: move |_| info!(action, "system action requested"),
                        "{action}"
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsTab() -> Element {
    let mut audit_logging = use_signal(|| true);
    let mut email_alerts = use_signal(|| true);
    let mut session_timeout = use_signal(|| 30u32);
    let mut query_limit = use_signal(|| 1_000u32);

    rsx! {
        div { class: "space-y-4 rounded-lg border border-slate-200 p-4 text-sm dark:border-slate-800",
            label { class: "flex items-center justify-between",
                span { "Registo de auditoria" }
                input {
                    r#type: "checkbox",
                    checked: audit_logging(),
                    onchange: move |evt| audit_logging.set(evt.checked()),
                }
            }
            label { class: "flex items-center justify-between",
                span { "Alertas por email" }
                input {
                    r#type: "checkbox",
                    checked: email_alerts(),
                    onchange: move |evt| email_alerts.set(evt.checked()),
                }
            }
            label { class: "flex items-center justify-between",
                span { "Expiração da sessão (min)" }
                input {
                    class: "w-24 rounded border border-slate-300 px-2 py-1 dark:bg-slate-950",
                    r#type: "number",
                    value: "{session_timeout}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            session_timeout.set(value);
                        }
                    },
                }
            }
            label { class: "flex items-center justify-between",
                span { "Limite diário de consultas" }
                input {
                    class: "w-24 rounded border border-slate-300 px-2 py-1 dark:bg-slate-950",
                    r#type: "number",
                    value: "{query_limit}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            query_limit.set(value);
                        }
                    },
                }
            }
            button {
                class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white",
                onclick: move |_| {
                    info!(
                        audit = audit_logging(),
                        email = email_alerts(),
                        timeout_min = session_timeout(),
                        query_limit = query_limit(),
                        "settings saved locally"
                    );
                },
                "Guardar"
            }
        }
    }
}
