use dioxus::prelude::*;

use crate::models::{Approval, Decision, Priority};
use crate::state::{facet_values, use_app_actions, use_app_state, AppActions, QuotePage};
use crate::ui::widgets::{badge, empty_state, panel_header, stat_card};

use super::{filter_bar, FacetSelect};

#[component]
pub fn ApprovalsPage() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let quote = &snapshot.smartquote;
    let filter = quote.approval_filter.clone();
    let visible: Vec<Approval> = filter.apply(&quote.approvals).into_iter().cloned().collect();
    let owners = facet_values(&quote.approvals, 1);
    let pending = quote.pending_count();
    let urgent = quote
        .approvals
        .iter()
        .filter(|a| a.decision.is_none() && a.priority == Priority::High)
        .count();
    let decided = quote.approvals.len() - pending;
    drop(snapshot);

    let selects = vec![
        FacetSelect {
            index: 0,
            sentinel: "Todas",
            all_label: "Todas as prioridades",
            options: Priority::ALL
                .iter()
                .map(|p| (p.as_str().to_string(), p.label().to_string()))
                .collect(),
        },
        FacetSelect {
            index: 1,
            sentinel: "Todos",
            all_label: "Todos os responsáveis",
            options: owners.into_iter().map(|o| (o.clone(), o)).collect(),
        },
    ];

    rsx! {
        section { class: "space-y-6",
            {panel_header("Aprovações pendentes", "Cotações que excedem os limites automáticos e aguardam decisão.")}
            div { class: "grid gap-4 md:grid-cols-3",
                {stat_card("Pendentes", pending.to_string(), "", "text-amber-600")}
                {stat_card("Alta prioridade", urgent.to_string(), "", "text-red-600")}
                {stat_card("Decididas", decided.to_string(), "nesta sessão", "text-green-600")}
            }
            {filter_bar(QuotePage::Approvals, &filter, "Pesquisar por cliente, ID ou fornecedor...", selects, actions)}
            if visible.is_empty() {
                {empty_state("Nenhuma aprovação encontrada", "Ajuste a pesquisa ou os filtros.")}
            }
            div { class: "space-y-3",
                for approval in visible.iter() {
                    {approval_card(approval, actions)}
                }
            }
        }
    }
}

fn approval_card(approval: &Approval, actions: AppActions) -> Element {
    let approve_id = approval.id.clone();
    let reject_id = approval.id.clone();

    rsx! {
        article {
            key: "{approval.id}",
            class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
            header { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    div { class: "flex items-center gap-2",
                        h3 { class: "text-sm font-semibold", "{approval.client}" }
                        {badge(approval.priority.label(), approval.priority.badge_class())}
                    }
                    p { class: "font-mono text-[11px] text-slate-500", "{approval.id}" }
                }
                p { class: "text-lg font-bold text-emerald-700", "{approval.value}" }
            }
            p { class: "text-xs text-slate-600 dark:text-slate-300", "{approval.description}" }
            div { class: "grid gap-2 text-[11px] text-slate-500 md:grid-cols-3",
                span { "Motivo: {approval.reason}" }
                span { "Responsável: {approval.owner}" }
                span { "Categoria: {approval.category}" }
                span { "Fornecedor: {approval.supplier}" }
                span { "Prazo: {approval.deadline}" }
                span { "Submetido: {approval.submitted_at}" }
            }
            {match approval.decision {
                Some(Decision::Approved) => badge("Aprovada", "bg-green-100 border-green-200 text-green-800"),
                Some(Decision::Rejected) => badge("Rejeitada", "bg-red-100 border-red-200 text-red-800"),
                None => rsx! {
                    div { class: "flex gap-2",
                        button {
                            class: "rounded-md bg-emerald-600 px-3 py-1 text-xs font-semibold text-white",
                            onclick: move |_| actions.decide_approval(&approve_id, Decision::Approved),
                            "Aprovar"
                        }
                        button {
                            class: "rounded-md border border-red-300 px-3 py-1 text-xs font-semibold text-red-700",
                            onclick: move |_| actions.decide_approval(&reject_id, Decision::Rejected),
                            "Rejeitar"
                        }
                    }
                },
            }}
        }
    }
}
