use dioxus::prelude::*;

use crate::fixtures::query::{data_source_summaries, suggested_queries};
use crate::hooks::query::use_query_runner;
use crate::models::{QueryResult, ResultPayload};
use crate::services::format::{now_ms, time_ago};
use crate::state::use_app_state;
use crate::ui::widgets::{badge, bar_row, panel_header};

#[component]
pub fn QueryPanel() -> Element {
    let runner = use_query_runner();
    let app_state = use_app_state();
    let mut input = use_signal(String::new);

    let snapshot = app_state.read();
    let is_processing = snapshot.query.is_processing;
    let current = snapshot.query.current.clone();
    drop(snapshot);

    let blank = input.read().trim().is_empty();

    rsx! {
        section { class: "space-y-6",
            {panel_header("Consulta em linguagem natural", "Pergunte sobre os dados das suas fontes conectadas.")}

            div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
                textarea {
                    class: "h-24 w-full resize-none rounded-md border border-slate-300 p-3 text-sm dark:bg-slate-950",
                    placeholder: "Ex.: Mostrar pedidos do Primavera com status pendente",
                    disabled: is_processing,
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                            evt.prevent_default();
                            if runner.submit(input()) {
                                input.set(String::new());
                            }
                        }
                    },
                }
                div { class: "flex items-center justify-between",
                    p { class: "text-[11px] text-slate-400", "Enter para enviar, Shift+Enter para nova linha" }
                    button {
                        class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white disabled:opacity-50",
                        disabled: is_processing || blank,
                        onclick: move |_| {
                            if runner.submit(input()) {
                                input.set(String::new());
                            }
                        },
                        if is_processing { "A processar..." } else { "Consultar" }
                    }
                }
            }

            if is_processing {
                div { class: "rounded-lg border border-blue-200 bg-blue-50 p-4 text-sm text-blue-700",
                    "A analisar a consulta e a recolher dados das fontes..."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "space-y-2",
                    h3 { class: "text-sm font-semibold", "Consultas sugeridas" }
                    for suggestion in suggested_queries() {
                        button {
                            key: "{suggestion.text}",
                            class: "w-full rounded-md border border-slate-200 p-3 text-left text-sm hover:border-blue-400 disabled:opacity-50 dark:border-slate-800",
                            disabled: is_processing,
                            onclick: move |_| {
                                runner.submit(suggestion.text.to_string());
                            },
                            p { "{suggestion.text}" }
                            div { class: "mt-1 flex gap-2 text-[11px] text-slate-500",
                                span { "{suggestion.source}" }
                                span { "{suggestion.complexity}" }
                            }
                        }
                    }
                }
                div { class: "space-y-2",
                    h3 { class: "text-sm font-semibold", "Fontes de dados" }
                    div { class: "grid grid-cols-2 gap-2",
                        for source in data_source_summaries() {
                            div {
                                key: "{source.name}",
                                class: "rounded-md border border-slate-200 p-3 dark:border-slate-800",
                                p { class: "text-sm font-medium", "{source.name}" }
                                p { class: "text-[11px] text-green-600", "{source.status}" }
                                p { class: "text-[11px] text-slate-500", "{source.count}" }
                            }
                        }
                    }
                }
            }

            if let Some(result) = current {
                {result_view(&result)}
            }
        }
    }
}

pub fn result_view(result: &QueryResult) -> Element {
    let when = time_ago(now_ms(), result.timestamp_ms);

    rsx! {
        article { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
            header { class: "space-y-1",
                h3 { class: "text-sm font-semibold", "{result.query}" }
                div { class: "flex flex-wrap items-center gap-2 text-[11px] text-slate-500",
                    {badge(&result.data_source, "border-slate-200")}
                    {badge(result.kind.as_str(), "border-blue-200 text-blue-700")}
                    span { "{result.user}" }
                    span { "{when}" }
                }
            }
            {payload_view(&result.payload)}
            if !result.insights.is_empty() {
                div { class: "space-y-1 rounded-md bg-amber-50 p-3 dark:bg-amber-950",
                    h4 { class: "text-xs font-semibold text-amber-800 dark:text-amber-200", "Insights" }
                    ul { class: "list-disc space-y-1 pl-4 text-xs",
                        for insight in result.insights.iter() {
                            li { key: "{insight}", "{insight}" }
                        }
                    }
                }
            }
        }
    }
}

pub fn payload_view(payload: &ResultPayload) -> Element {
    match payload {
        ResultPayload::Table { columns, rows } => rsx! {
            div { class: "overflow-x-auto",
                table { class: "min-w-full text-left text-xs",
                    thead {
                        tr { class: "border-b border-slate-200",
                            for column in columns.iter() {
                                th { key: "{column}", class: "px-3 py-2 font-semibold", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (idx, row) in rows.iter().enumerate() {
                            tr { key: "{idx}", class: "border-b border-slate-100 dark:border-slate-800",
                                for (col, cell) in row.iter().enumerate() {
                                    td { key: "{col}", class: "px-3 py-2", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        ResultPayload::Bar { points } => {
            let max = points.iter().map(|p| p.value).max().unwrap_or(0);
            rsx! {
                div { class: "space-y-3",
                    for point in points.iter() {
                        div { key: "{point.name}",
                            {bar_row(
                                &point.name,
                                point.value,
                                max,
                                format!("{} ({})", point.value, point.trend),
                                if point.is_rising() { "bg-red-400" } else { "bg-emerald-500" },
                            )}
                        }
                    }
                }
            }
        }
        ResultPayload::Line { points } => {
            let max = points.iter().map(|p| p.value).max().unwrap_or(0);
            rsx! {
                div { class: "space-y-3",
                    for point in points.iter() {
                        div { key: "{point.month}",
                            {bar_row(
                                &point.month,
                                point.value,
                                max,
                                format!("{} · satisfação {:.1}", point.value, point.satisfaction),
                                "bg-blue-500",
                            )}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::credentials::DEMO_PASSWORD;
    use crate::models::Product;
    use crate::services::auth::authenticate;
    use crate::services::query::build_result;
    use crate::state::AppState;

    const ASKED: &str = "Quantos pedidos do Primavera ficaram em aberto";

    fn answered_panel() -> Element {
        let app_state = use_signal(|| {
            let mut state = AppState::with_clock(Product::SmartBi, 0);
            state.session.is_restoring = false;
            state.session.user =
                authenticate(Product::SmartBi, "analista@smartbi.pt", DEMO_PASSWORD).ok();
            state.query.record(build_result(ASKED, "Ana Costa", 0).unwrap());
            state
        });
        use_context_provider(|| app_state);

        rsx! { QueryPanel {} }
    }

    #[test]
    fn suggestions_and_sources_stay_after_an_answer() {
        let mut dom = VirtualDom::new(answered_panel);
        let edits = format!("{:?}", dom.rebuild_to_vec().edits);

        for suggestion in suggested_queries() {
            assert!(edits.contains(suggestion.text), "missing {}", suggestion.text);
        }
        for source in data_source_summaries() {
            assert!(edits.contains(source.count), "missing {}", source.count);
        }
        assert!(edits.contains(ASKED));
    }
}
