use dioxus::prelude::*;

use crate::models::{LogEntry, LogLevel};
use crate::state::{facet_values, use_app_actions, use_app_state, QuotePage};
use crate::ui::widgets::{badge, empty_state, panel_header, stat_card};

use super::{filter_bar, FacetSelect};

#[component]
pub fn LogsPage() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let quote = &snapshot.smartquote;
    let filter = quote.log_filter.clone();
    let visible: Vec<LogEntry> = filter.apply(&quote.logs).into_iter().cloned().collect();
    let categories = facet_values(&quote.logs, 1);
    let total = quote.logs.len();
    let errors = count_level(&quote.logs, LogLevel::Error);
    let warnings = count_level(&quote.logs, LogLevel::Warning);
    drop(snapshot);

    let selects = vec![
        FacetSelect {
            index: 0,
            sentinel: "Todos",
            all_label: "Todos os níveis",
            options: LogLevel::ALL
                .iter()
                .map(|l| (l.as_str().to_string(), l.label().to_string()))
                .collect(),
        },
        FacetSelect {
            index: 1,
            sentinel: "Todas",
            all_label: "Todas as categorias",
            options: categories.into_iter().map(|c| (c.clone(), c)).collect(),
        },
    ];

    rsx! {
        section { class: "space-y-6",
            {panel_header("Logs do sistema", "Atividade recente do motor de cotações e dos utilizadores.")}
            div { class: "grid gap-4 md:grid-cols-3",
                {stat_card("Eventos", total.to_string(), "", "")}
                {stat_card("Erros", errors.to_string(), "", "text-red-600")}
                {stat_card("Avisos", warnings.to_string(), "", "text-orange-600")}
            }
            {filter_bar(QuotePage::Logs, &filter, "Pesquisar detalhes, utilizador ou ação...", selects, actions)}
            if visible.is_empty() {
                {empty_state("Nenhum registo encontrado", "Ajuste a pesquisa ou os filtros.")}
            } else {
                div { class: "overflow-x-auto rounded-lg border border-slate-200 dark:border-slate-800",
                    table { class: "min-w-full text-left text-xs",
                        thead {
                            tr { class: "border-b border-slate-200 dark:border-slate-800",
                                th { class: "px-3 py-2", "Data" }
                                th { class: "px-3 py-2", "Nível" }
                                th { class: "px-3 py-2", "Categoria" }
                                th { class: "px-3 py-2", "Utilizador" }
                                th { class: "px-3 py-2", "Ação" }
                                th { class: "px-3 py-2", "Detalhes" }
                                th { class: "px-3 py-2", "IP" }
                                th { class: "px-3 py-2", "Duração" }
                            }
                        }
                        tbody {
                            for entry in visible.iter() {
                                tr { key: "{entry.id}", class: "border-b border-slate-100 align-top dark:border-slate-800",
                                    td { class: "whitespace-nowrap px-3 py-2 font-mono", "{entry.timestamp}" }
                                    td { class: "px-3 py-2", {badge(entry.level.label(), entry.level.badge_class())} }
                                    td { class: "px-3 py-2", "{entry.category}" }
                                    td { class: "px-3 py-2", "{entry.user}" }
                                    td { class: "px-3 py-2 font-medium", "{entry.action}" }
                                    td { class: "px-3 py-2", "{entry.details}" }
                                    td { class: "px-3 py-2 font-mono", "{entry.ip}" }
                                    td { class: "px-3 py-2", "{entry.duration}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn count_level(entries: &[LogEntry], level: LogLevel) -> usize {
    entries.iter().filter(|e| e.level == level).count()
}
