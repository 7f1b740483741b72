use crate::state::{use_app_actions, use_app_state};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    #[props(optional)]
    pub on_close: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (container_class, accent_text) = props.kind.accent_classes();

    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {container_class}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold {accent_text}", "{props.title}" }
                    p { class: "text-xs text-slate-700", "{props.message}" }
                }
                if let Some(handler) = props.on_close {
                    button {
                        class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                        onclick: move |evt| handler.call(evt),
                        "Fechar"
                    }
                }
            }
        }
    }
}

/// Renders the operation outcome of the product root it is mounted in.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let operation = use_app_state().read().operation.clone();

    let toast = if let Some(error) = operation.error {
        let title = operation
            .context
            .unwrap_or_else(|| "Operação falhou".to_string());
        rsx! {
            Toast {
                kind: ToastKind::Error,
                title,
                message: error,
                on_close: move |_| actions.clear_operation_status(),
            }
        }
    } else if let Some(message) = operation.last_message {
        let title = operation
            .context
            .unwrap_or_else(|| "Operação concluída".to_string());
        rsx! {
            Toast {
                kind: ToastKind::Success,
                title,
                message,
                on_close: move |_| actions.clear_operation_status(),
            }
        }
    } else {
        return rsx! {};
    };

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
            {toast}
        }
    }
}
