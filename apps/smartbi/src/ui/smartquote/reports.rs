use dioxus::prelude::*;
use tracing::info;

use crate::models::{Report, ReportStatus};
use crate::state::{facet_values, use_app_actions, use_app_state, QuotePage};
use crate::ui::widgets::{badge, empty_state, panel_header, stat_card};

use super::{filter_bar, FacetSelect};

#[component]
pub fn ReportsPage() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let quote = &snapshot.smartquote;
    let filter = quote.report_filter.clone();
    let visible: Vec<Report> = filter.apply(&quote.reports).into_iter().cloned().collect();
    let kinds = facet_values(&quote.reports, 0);
    let total = quote.reports.len();
    let downloads: u32 = quote.reports.iter().map(|r| r.downloads).sum();
    drop(snapshot);

    let selects = vec![
        FacetSelect {
            index: 0,
            sentinel: "Todos",
            all_label: "Todos os tipos",
            options: kinds.into_iter().map(|k| (k.clone(), k)).collect(),
        },
        FacetSelect {
            index: 1,
            sentinel: "Todos",
            all_label: "Todos os estados",
            options: ReportStatus::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
                .collect(),
        },
    ];

    rsx! {
        section { class: "space-y-6",
            {panel_header("Relatórios", "Relatórios gerados pelo sistema e pela equipa.")}
            div { class: "grid gap-4 md:grid-cols-2",
                {stat_card("Relatórios", total.to_string(), "", "")}
                {stat_card("Downloads", downloads.to_string(), "", "text-blue-600")}
            }
            {filter_bar(QuotePage::Reports, &filter, "Pesquisar título, descrição ou autor...", selects, actions)}
            if visible.is_empty() {
                {empty_state("Nenhum relatório encontrado", "Ajuste a pesquisa ou os filtros.")}
            }
            div { class: "grid gap-3 lg:grid-cols-2",
                for report in visible.iter() {
                    article {
                        key: "{report.id}",
                        class: "space-y-2 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
                        header { class: "flex items-start justify-between gap-2",
                            div {
                                h3 { class: "text-sm font-semibold", "{report.title}" }
                                p { class: "text-[11px] text-slate-500", "{report.kind} · {report.period}" }
                            }
                            {badge(report.status.as_str(), report.status.badge_class())}
                        }
                        p { class: "text-xs text-slate-600 dark:text-slate-300", "{report.description}" }
                        div { class: "flex flex-wrap gap-3 text-[11px] text-slate-500",
                            span { "{report.format} · {report.size}" }
                            span { "{report.author}" }
                            span { "{report.generated_at}" }
                            span { "{report.downloads} downloads" }
                        }
                        button {
                            class: "rounded border border-slate-300 px-3 py-1 text-xs disabled:opacity-50",
                            disabled: report.status != ReportStatus::Completed,
                            onclick: {
                                let id = report.id.clone();
                                move |_| info!(report = %id, "report download requested")
                            },
                            "Descarregar"
                        }
                    }
                }
            }
        }
    }
}
