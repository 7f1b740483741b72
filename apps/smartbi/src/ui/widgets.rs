use dioxus::prelude::*;

/// Width of a proportional bar, in whole percent.
pub fn percent_of(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((value as u64 * 100) / max as u64).min(100) as u32
}

pub fn stat_card(label: &str, value: String, hint: &str, accent: &str) -> Element {
    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900",
            p { class: "text-xs font-medium text-slate-500", "{label}" }
            p { class: "mt-1 text-2xl font-bold {accent}", "{value}" }
            if !hint.is_empty() {
                p { class: "text-[11px] text-slate-400", "{hint}" }
            }
        }
    }
}

pub fn bar_row(label: &str, value: u32, max: u32, caption: String, color: &str) -> Element {
    let width = percent_of(value, max);
    rsx! {
        div { class: "space-y-1",
            div { class: "flex items-center justify-between text-xs",
                span { class: "font-medium text-slate-700 dark:text-slate-200", "{label}" }
                span { class: "text-slate-500", "{caption}" }
            }
            div { class: "h-2 w-full rounded-full bg-slate-100 dark:bg-slate-800",
                div { class: "h-2 rounded-full {color}", style: "width: {width}%" }
            }
        }
    }
}

pub fn badge(text: &str, class: &str) -> Element {
    rsx! {
        span { class: "inline-flex items-center rounded-full border px-2 py-0.5 text-[11px] font-medium {class}",
            "{text}"
        }
    }
}

pub fn empty_state(title: &str, hint: &str) -> Element {
    rsx! {
        div { class: "rounded-lg border border-dashed border-slate-300 p-8 text-center",
            p { class: "text-sm font-medium text-slate-600", "{title}" }
            p { class: "text-xs text-slate-400", "{hint}" }
        }
    }
}

pub fn panel_header(title: &str, subtitle: &str) -> Element {
    rsx! {
        header { class: "flex flex-col gap-1",
            h2 { class: "text-lg font-semibold", "{title}" }
            p { class: "text-xs text-slate-500", "{subtitle}" }
        }
    }
}

/// Maps a select value to a filter, treating the "all" sentinels as none.
pub fn select_filter(value: String) -> Option<String> {
    match value.as_str() {
        "" | "all" | "Todas" | "Todos" => None,
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent_of(45, 45), 100);
        assert_eq!(percent_of(15, 45), 33);
        assert_eq!(percent_of(90, 45), 100);
        assert_eq!(percent_of(3, 0), 0);
    }

    #[test]
    fn sentinels_clear_the_filter() {
        assert_eq!(select_filter("Todas".into()), None);
        assert_eq!(select_filter("Todos".into()), None);
        assert_eq!(select_filter("all".into()), None);
        assert_eq!(select_filter("high".into()), Some("high".into()));
    }
}
