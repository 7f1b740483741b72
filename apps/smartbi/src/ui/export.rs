use dioxus::prelude::*;
use tracing::warn;

use crate::fixtures::exports::{export_formats, export_history};
use crate::hooks::blocking_alert;
use crate::models::{ExportJob, ExportStatus};
use crate::services::format::{now_ms, short_date};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::widgets::{badge, empty_state, panel_header, stat_card};

#[component]
pub fn ExportPanel() -> Element {
    let actions = use_app_actions();
    let app_state = use_app_state();

    let snapshot = app_state.read();
    let draft = snapshot.export.clone();
    let queries = snapshot.query.history.clone();
    drop(snapshot);

    let jobs = export_history(now_ms());
    let completed = count_status(&jobs, ExportStatus::Completed);
    let processing = count_status(&jobs, ExportStatus::Processing);
    let downloads: u32 = jobs.iter().map(|job| job.downloads).sum();
    let all_selected = !queries.is_empty() && draft.selected.len() == queries.len();

    rsx! {
        section { class: "space-y-6",
            {panel_header("Exportar resultados", "Exporte consultas para ficheiros ou ferramentas de BI.")}

            div { class: "grid gap-4 md:grid-cols-3",
                {stat_card("Concluídas", completed.to_string(), "", "text-green-600")}
                {stat_card("Em processamento", processing.to_string(), "", "text-blue-600")}
                {stat_card("Downloads", downloads.to_string(), "", "")}
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    div { class: "flex items-center justify-between",
                        h3 { class: "text-sm font-semibold", "Consultas ({draft.selected.len()} selecionadas)" }
                        if !queries.is_empty() {
                            button {
                                class: "text-xs text-blue-600",
                                onclick: move |_| actions.toggle_all_export_queries(),
                                if all_selected { "Desmarcar todas" } else { "Selecionar todas" }
                            }
                        }
                    }
                    if queries.is_empty() {
                        {empty_state("Sem consultas para exportar", "Faça uma consulta primeiro.")}
                    }
                    for query in queries.iter() {
                        label {
                            key: "{query.id}",
                            class: "flex items-start gap-2 rounded-md border border-slate-200 p-2 text-xs dark:border-slate-800",
                            input {
                                r#type: "checkbox",
                                checked: draft.is_selected(&query.id),
                                onchange: {
                                    let id = query.id.clone();
                                    move |_| actions.toggle_export_query(&id)
                                },
                            }
                            span { class: "flex-1", "{query.query}" }
                            span { class: "text-slate-400", "{query.data_source}" }
                        }
                    }
                }

                div { class: "space-y-3 rounded-lg border border-slate-200 p-4 dark:border-slate-800",
                    h3 { class: "text-sm font-semibold", "Formato" }
                    div { class: "grid gap-2 md:grid-cols-2",
                        for format in export_formats() {
                            button {
                                key: "{format.id}",
                                class: if draft.format.as_deref() == Some(format.id) {
                                    "rounded-md border-2 border-blue-500 p-2 text-left text-xs"
                                } else {
                                    "rounded-md border border-slate-200 p-2 text-left text-xs dark:border-slate-800"
                                },
                                onclick: move |_| actions.edit_export(|d| d.format = Some(format.id.to_string())),
                                p { class: "font-medium", "{format.name}" }
                                p { class: "text-[11px] text-slate-500", "{format.description}" }
                            }
                        }
                    }
                    input {
                        class: "w-full rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                        placeholder: "Nome da exportação",
                        value: "{draft.name}",
                        oninput: move |evt| actions.edit_export(|d| d.name = evt.value()),
                    }
                    textarea {
                        class: "h-16 w-full rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                        placeholder: "Descrição (opcional)",
                        value: "{draft.description}",
                        oninput: move |evt| actions.edit_export(|d| d.description = evt.value()),
                    }
                    label { class: "flex items-center gap-2 text-xs",
                        input {
                            r#type: "checkbox",
                            checked: draft.schedule,
                            onchange: move |evt| actions.edit_export(|d| d.schedule = evt.checked()),
                        }
                        "Agendar envio por email"
                    }
                    if draft.schedule {
                        input {
                            class: "w-full rounded-md border border-slate-300 px-3 py-2 text-sm dark:bg-slate-950",
                            placeholder: "destinatario@empresa.pt, outro@empresa.pt",
                            value: "{draft.recipients}",
                            oninput: move |evt| actions.edit_export(|d| d.recipients = evt.value()),
                        }
                    }
                    button {
                        class: "w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white",
                        onclick: move |_| match actions.submit_export() {
                            Ok(request) => {
                                let message = request.confirmation();
                                blocking_alert(&message);
                                actions.set_operation_success(message);
                            }
                            Err(err) => {
                                warn!(%err, "export rejected");
                                if err.is_blocking() {
                                    blocking_alert(&err.to_string());
                                } else {
                                    actions.set_operation_error("Exportação", err.to_string());
                                }
                            }
                        },
                        "Criar exportação"
                    }
                }
            }

            div { class: "space-y-2",
                h3 { class: "text-sm font-semibold", "Histórico de exportações" }
                for job in jobs.iter() {
                    div {
                        key: "{job.id}",
                        class: "flex items-center justify-between rounded-md border border-slate-200 p-3 text-xs dark:border-slate-800",
                        div {
                            p { class: "font-medium", "{job.name}" }
                            p { class: "text-slate-500",
                                "{job.format} · {job.size} · "
                                {short_date(job.created_at_ms)}
                            }
                        }
                        div { class: "flex items-center gap-3",
                            span { class: "text-slate-500", "{job.downloads} downloads" }
                            {badge(job.status.label(), status_class(job.status))}
                        }
                    }
                }
            }
        }
    }
}

fn count_status(jobs: &[ExportJob], status: ExportStatus) -> usize {
    jobs.iter().filter(|job| job.status == status).count()
}

fn status_class(status: ExportStatus) -> &'static str {
    match status {
        ExportStatus::Completed => "bg-green-100 border-green-200 text-green-800",
        ExportStatus::Processing => "bg-blue-100 border-blue-200 text-blue-800",
        ExportStatus::Failed => "bg-red-100 border-red-200 text-red-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_counters_match_fixtures() {
        let jobs = export_history(0);
        assert_eq!(count_status(&jobs, ExportStatus::Completed), 3);
        assert_eq!(count_status(&jobs, ExportStatus::Processing), 1);
        assert_eq!(jobs.iter().map(|j| j.downloads).sum::<u32>(), 22);
    }
}
