use dioxus::prelude::*;

use crate::fixtures::insights::{category_shares, trending_data};
use crate::models::{Insight, Priority};
use crate::services::format::{now_ms, time_ago};
use crate::state::{use_app_actions, use_app_state, AppActions};
use crate::ui::widgets::{badge, bar_row, panel_header, stat_card};

#[component]
pub fn InsightsPanel() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let board = snapshot.insights.clone();
    drop(snapshot);

    let now = now_ms();
    let visible: Vec<Insight> = board.visible().into_iter().cloned().collect();
    let selected = board.priority.map_or("all", Priority::as_str);

    let trend = trending_data();
    let trend_max = trend.iter().map(|p| p.docs).max().unwrap_or(0);
    let shares = category_shares();
    let share_total: u32 = shares.iter().map(|s| s.value).sum();

    rsx! {
        section { class: "space-y-6",
            {panel_header("Insights automáticos", "Padrões detetados pela IA nas fontes conectadas.")}

            div { class: "grid gap-4 md:grid-cols-4",
                {stat_card("Insights", board.insights.len().to_string(), "", "")}
                {stat_card("Alta prioridade", board.high_priority_count().to_string(), "", "text-red-600")}
                {stat_card("Oportunidades", board.opportunity_count().to_string(), "", "text-green-600")}
                {stat_card("Confiança média", format!("{}%", board.average_confidence()), "", "text-blue-600")}
            }

            div { class: "flex items-center gap-2",
                span { class: "text-xs text-slate-500", "Prioridade" }
                select {
                    class: "rounded-md border border-slate-300 px-3 py-1 text-sm dark:bg-slate-950",
                    value: selected,
                    onchange: move |evt| actions.set_insight_priority(Priority::parse(&evt.value())),
                    option { value: "all", "Todas" }
                    for priority in Priority::ALL {
                        option { key: "{priority.as_str()}", value: priority.as_str(), "{priority.label()}" }
                    }
                }
            }

            div { class: "space-y-3",
                for insight in visible.iter() {
                    {insight_card(insight, board.expanded == Some(insight.id), now, actions)}
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    h3 { class: "text-sm font-semibold", "Tendências (documentos)" }
                    for point in trend.iter() {
                        div { key: "{point.month}",
                            {bar_row(
                                point.month,
                                point.docs,
                                trend_max,
                                format!("{} docs · {} vendas · {} tickets", point.docs, point.sales, point.tickets),
                                "bg-indigo-500",
                            )}
                        }
                    }
                }
                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    h3 { class: "text-sm font-semibold", "Distribuição por categoria" }
                    for share in shares.iter() {
                        div { key: "{share.name}", class: "space-y-1",
                            div { class: "flex justify-between text-xs",
                                span { "{share.name}" }
                                span { "{share.value}%" }
                            }
                            div { class: "h-2 rounded-full bg-slate-100 dark:bg-slate-800",
                                div {
                                    class: "h-2 rounded-full",
                                    style: "width: {share.value}%; background-color: {share.color}",
                                }
                            }
                        }
                    }
                    p { class: "text-[11px] text-slate-400", "Total: {share_total}%" }
                }
            }
        }
    }
}

fn insight_card(insight: &Insight, expanded: bool, now: i64, actions: AppActions) -> Element {
    let id = insight.id;

    rsx! {
        article {
            key: "{insight.id}",
            class: "cursor-pointer space-y-2 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
            onclick: move |_| actions.toggle_insight(id),
            header { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold", "{insight.title}" }
                    div { class: "flex flex-wrap gap-2 text-[11px] text-slate-500",
                        {badge(insight.priority.label(), insight.priority.badge_class())}
                        {badge(insight.kind.label(), "border-slate-200")}
                        span { "{insight.category}" }
                        span { "{insight.data_source}" }
                        span { {time_ago(now, insight.created_at_ms)} }
                    }
                }
                span { class: "text-xs font-semibold text-blue-600", "{insight.confidence}%" }
            }
            p { class: "text-xs text-slate-600 dark:text-slate-300", "{insight.description}" }
            if expanded {
                div { class: "grid gap-4 border-t border-slate-200 pt-3 md:grid-cols-2 dark:border-slate-800",
                    div { class: "space-y-1",
                        h4 { class: "text-xs font-semibold", "Métricas" }
                        for (label, value) in insight.metrics.iter() {
                            p { key: "{label}", class: "flex justify-between text-xs",
                                span { class: "text-slate-500", "{label}" }
                                span { class: "font-medium", "{value}" }
                            }
                        }
                        p { class: "text-[11px] text-slate-400", "Impacto: {insight.impact}" }
                    }
                    div { class: "space-y-1",
                        h4 { class: "text-xs font-semibold", "Recomendações" }
                        ul { class: "list-disc space-y-1 pl-4 text-xs",
                            for recommendation in insight.recommendations.iter() {
                                li { key: "{recommendation}", "{recommendation}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
