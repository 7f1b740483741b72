mod approvals;
mod logs;
mod reports;

use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state, AppActions, QuotePage, RecordFilter};
use crate::ui::shell::AppHeader;
use crate::ui::widgets::select_filter;

use approvals::ApprovalsPage;
use logs::LogsPage;
use reports::ReportsPage;

#[component]
pub fn SmartQuoteWorkspace() -> Element {
    let actions = use_app_actions();
    let page = use_app_state().read().smartquote.page;

    let content = match page {
        QuotePage::Approvals => rsx! { ApprovalsPage {} },
        QuotePage::Logs => rsx! { LogsPage {} },
        QuotePage::Reports => rsx! { ReportsPage {} },
    };

    rsx! {
        AppHeader {}
        nav { class: "flex gap-2 border-b border-slate-200 px-6 dark:border-slate-800",
            for candidate in QuotePage::ALL {
                button {
                    key: "{candidate.label()}",
                    class: if candidate == page {
                        "border-b-2 border-emerald-600 px-3 py-2 text-sm font-medium text-emerald-700"
                    } else {
                        "px-3 py-2 text-sm text-slate-500 hover:text-slate-800"
                    },
                    onclick: move |_| actions.set_quote_page(candidate),
                    "{candidate.label()}"
                }
            }
        }
        main { class: "space-y-6 p-6", {content} }
    }
}

/// One select over a record facet. `options` are `(value, label)` pairs;
/// `sentinel` is the value meaning "no filter".
pub(crate) struct FacetSelect {
    pub index: usize,
    pub sentinel: &'static str,
    pub all_label: &'static str,
    pub options: Vec<(String, String)>,
}

pub(crate) fn filter_bar(
    page: QuotePage,
    filter: &RecordFilter,
    placeholder: &str,
    selects: Vec<FacetSelect>,
    actions: AppActions,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2",
            input {
                class: "flex-1 rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                placeholder: "{placeholder}",
                value: "{filter.search}",
                oninput: move |evt| actions.edit_quote_filter(page, |f| f.search = evt.value()),
            }
            for facet in selects {
                select {
                    key: "{facet.index}",
                    class: "rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                    value: filter.facets[facet.index].clone().unwrap_or_else(|| facet.sentinel.to_string()),
                    onchange: move |evt| {
                        actions.edit_quote_filter(page, |f| f.set_facet(facet.index, select_filter(evt.value())))
                    },
                    option { value: "{facet.sentinel}", "{facet.all_label}" }
                    for (value, label) in facet.options {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
        }
    }
}
