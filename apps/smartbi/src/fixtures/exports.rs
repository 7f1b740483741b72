use crate::models::{ExportFormat, ExportJob, ExportStatus};

use super::{hours_ago, minutes_ago};

pub fn export_formats() -> Vec<ExportFormat> {
    vec![
        ExportFormat {
            id: "excel",
            name: "Excel (.xlsx)",
            description: "Formato completo com formatação",
        },
        ExportFormat {
            id: "csv",
            name: "CSV",
            description: "Dados tabulares simples",
        },
        ExportFormat {
            id: "pdf",
            name: "PDF Report",
            description: "Relatório formatado para impressão",
        },
        ExportFormat {
            id: "json",
            name: "JSON",
            description: "Formato estruturado para APIs",
        },
        ExportFormat {
            id: "powerbi",
            name: "Power BI",
            description: "Template para Power BI",
        },
    ]
}

pub fn export_history(now_ms: i64) -> Vec<ExportJob> {
    let job = |id, name: &str, format: &str, status, created_at_ms, size: &str, downloads| {
        ExportJob {
            id,
            name: name.to_string(),
            format: format.to_string(),
            status,
            created_at_ms,
            size: size.to_string(),
            downloads,
        }
    };

    vec![
        job(
            1,
            "Relatório de Tickets - Janeiro 2024",
            "Excel",
            ExportStatus::Completed,
            minutes_ago(now_ms, 30),
            "2.4 MB",
            3,
        ),
        job(
            2,
            "Análise de Vendas Q4 2023",
            "PDF",
            ExportStatus::Completed,
            hours_ago(now_ms, 2),
            "1.8 MB",
            7,
        ),
        job(
            3,
            "Dashboard Executivo",
            "Power BI",
            ExportStatus::Processing,
            minutes_ago(now_ms, 15),
            "—",
            0,
        ),
        job(
            4,
            "Dados Documentos DocuWare",
            "JSON",
            ExportStatus::Completed,
            hours_ago(now_ms, 6),
            "5.2 MB",
            12,
        ),
        job(5, "Performance Analytics", "CSV", ExportStatus::Failed, hours_ago(now_ms, 24), "—", 0),
    ]
}
