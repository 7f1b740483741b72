use dioxus::prelude::*;

use crate::fixtures::credentials::{demo_credentials, login_features};
use crate::hooks::session::{use_session_runner, LoginTrigger};
use crate::state::use_app_state;
use crate::APP_CONFIG;

#[component]
pub fn LoginView() -> Element {
    let runner = use_session_runner();
    let app_state = use_app_state();
    let (product, is_authenticating) = {
        let snapshot = app_state.read();
        (snapshot.product, snapshot.session.is_authenticating)
    };

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let organization = APP_CONFIG
        .get()
        .map(|c| c.organization.clone())
        .unwrap_or_default();
    let features = login_features(product);
    let submit_label = if is_authenticating { "A entrar..." } else { "Entrar" };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center p-6",
            div { class: "grid w-full max-w-5xl gap-8 lg:grid-cols-2",
                section { class: "space-y-6",
                    h1 { class: "text-3xl font-bold", "{product.title()}" }
                    p { class: "text-sm text-slate-500", "{product.tagline()}" }
                    ul { class: "space-y-2",
                        for feature in features {
                            li { key: "{feature}", class: "flex items-center gap-2 text-sm",
                                span { class: "h-2 w-2 rounded-full bg-blue-500" }
                                "{feature}"
                            }
                        }
                    }
                    p { class: "text-[11px] text-slate-400", "{organization}" }
                }

                section { class: "space-y-4 rounded-xl border border-slate-200 bg-white p-6 shadow-sm dark:border-slate-800 dark:bg-slate-900",
                    h2 { class: "text-lg font-semibold", "Iniciar sessão" }
                    form {
                        class: "space-y-3",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            if !is_authenticating {
                                runner.login(email(), password(), LoginTrigger::Form);
                            }
                        },
                        label { class: "block text-xs font-medium text-slate-600", "Email" }
                        input {
                            class: "w-full rounded-md border border-slate-300 px-3 py-2 text-sm",
                            r#type: "email",
                            required: true,
                            placeholder: "nome@empresa.pt",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        label { class: "block text-xs font-medium text-slate-600", "Palavra-passe" }
                        input {
                            class: "w-full rounded-md border border-slate-300 px-3 py-2 text-sm",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white disabled:opacity-50",
                            r#type: "submit",
                            disabled: is_authenticating,
                            "{submit_label}"
                        }
                    }

                    div { class: "space-y-2 border-t border-slate-200 pt-4",
                        h3 { class: "text-xs font-semibold uppercase tracking-wide text-slate-500",
                            "Credenciais de demonstração"
                        }
                        for credential in demo_credentials(product).iter() {
                            div {
                                key: "{credential.email}",
                                class: "flex items-center justify-between rounded-md border border-slate-200 p-3 dark:border-slate-800",
                                div { class: "space-y-0.5",
                                    p { class: "text-sm font-medium",
                                        {format!("{} · {}", credential.role.label(product), credential.name)}
                                    }
                                    p { class: "text-[11px] text-slate-500", "{credential.email}" }
                                    p { class: "text-[11px] text-slate-400", "{credential.description}" }
                                }
                                button {
                                    class: "rounded border border-slate-300 px-3 py-1 text-xs hover:bg-slate-100 disabled:opacity-50",
                                    disabled: is_authenticating,
                                    onclick: move |_| {
                                        email.set(credential.email.to_string());
                                        password.set(credential.password.to_string());
                                        runner.login(
                                            credential.email.to_string(),
                                            credential.password.to_string(),
                                            LoginTrigger::DemoShortcut,
                                        );
                                    },
                                    "Usar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
