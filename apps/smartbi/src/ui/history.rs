use dioxus::prelude::*;

use crate::hooks::query::use_query_runner;
use crate::services::format::{now_ms, short_date, time_ago};
use crate::state::{distinct_sources, use_app_actions, use_app_state, SortOrder, Tab};
use crate::ui::widgets::{badge, empty_state, panel_header, select_filter};

#[component]
pub fn HistoryPanel() -> Element {
    let actions = use_app_actions();
    let runner = use_query_runner();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let filter = snapshot.history_filter.clone();
    let total = snapshot.query.history.len();
    let sources = distinct_sources(&snapshot.query.history);
    let visible: Vec<_> = filter
        .apply(&snapshot.query.history)
        .into_iter()
        .cloned()
        .collect();
    let is_processing = snapshot.query.is_processing;
    drop(snapshot);

    let now = now_ms();
    let selected_source = filter.source.clone().unwrap_or_else(|| "all".to_string());

    rsx! {
        section { class: "space-y-4",
            {panel_header("Histórico de consultas", "Consultas realizadas nesta sessão.")}

            div { class: "flex flex-wrap gap-2",
                input {
                    class: "flex-1 rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                    placeholder: "Pesquisar consultas...",
                    value: "{filter.search}",
                    oninput: move |evt| actions.set_history_search(evt.value()),
                }
                select {
                    class: "rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                    value: "{selected_source}",
                    onchange: move |evt| actions.set_history_source(select_filter(evt.value())),
                    option { value: "all", "Todas as fontes" }
                    for source in sources {
                        option { key: "{source}", value: "{source}", "{source}" }
                    }
                }
                select {
                    class: "rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                    value: filter.sort.as_str(),
                    onchange: move |evt| actions.set_history_sort(SortOrder::parse(&evt.value())),
                    option { value: "recent", "Mais recentes" }
                    option { value: "oldest", "Mais antigas" }
                }
            }

            if total == 0 {
                {empty_state("Ainda não há consultas", "As consultas que fizer aparecem aqui.")}
            } else if visible.is_empty() {
                {empty_state("Nenhuma consulta encontrada", "Ajuste a pesquisa ou os filtros.")}
            } else {
                div { class: "space-y-3",
                    for result in visible {
                        article {
                            key: "{result.id}",
                            class: "space-y-2 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
                            div { class: "flex items-start justify-between gap-4",
                                div { class: "space-y-1",
                                    p { class: "text-sm font-medium", "{result.query}" }
                                    div { class: "flex flex-wrap gap-2 text-[11px] text-slate-500",
                                        {badge(&result.data_source, "border-slate-200")}
                                        {badge(result.kind.as_str(), "border-blue-200 text-blue-700")}
                                        span { {short_date(result.timestamp_ms)} }
                                        span { {time_ago(now, result.timestamp_ms)} }
                                    }
                                }
                                button {
                                    class: "rounded border border-slate-300 px-3 py-1 text-xs disabled:opacity-50",
                                    disabled: is_processing,
                                    onclick: {
                                        let text = result.query.clone();
                                        move |_| {
                                            if runner.submit(text.clone()) {
                                                actions.set_tab(Tab::Query);
                                            }
                                        }
                                    },
                                    "Repetir"
                                }
                            }
                            if let Some(first) = result.insights.first() {
                                p { class: "text-xs text-slate-600",
                                    "{first}"
                                    if result.insights.len() > 1 {
                                        span { class: "ml-1 text-slate-400", {format!("+{} mais", result.insights.len() - 1)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
