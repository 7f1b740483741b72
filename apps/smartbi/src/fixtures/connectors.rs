use crate::models::{Connector, ConnectorStatus, ConnectorTemplate};

use super::{hours_ago, minutes_ago};

struct Seed {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    status: ConnectorStatus,
    minutes_since_sync: i64,
    record_count: &'static str,
    description: &'static str,
    capabilities: [&'static str; 3],
    connection_string: Option<&'static str>,
    is_active: bool,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "primavera",
        name: "Primavera ERP",
        kind: "ERP System",
        status: ConnectorStatus::Connected,
        minutes_since_sync: 30,
        record_count: "15,423 registos",
        description: "Sistema de gestão empresarial com dados de vendas, compras, stocks e finanças.",
        capabilities: ["SQL Queries", "Real-time", "Batch Export"],
        connection_string: Some("primavera.empresa.pt:1433"),
        is_active: true,
    },
    Seed {
        id: "glpi",
        name: "GLPI",
        kind: "ITSM Platform",
        status: ConnectorStatus::Connected,
        minutes_since_sync: 15,
        record_count: "8,901 tickets",
        description: "Plataforma de gestão de serviços de TI com tickets, inventário e conhecimento.",
        capabilities: ["REST API", "Webhooks", "Custom Fields"],
        connection_string: Some("glpi.empresa.pt/api"),
        is_active: true,
    },
    Seed {
        id: "docuware",
        name: "DocuWare",
        kind: "Document Management",
        status: ConnectorStatus::Connected,
        minutes_since_sync: 5,
        record_count: "45,123 documentos",
        description: "Sistema de gestão documental com workflows de aprovação e arquivo digital.",
        capabilities: ["Document Search", "Metadata", "OCR Content"],
        connection_string: Some("docuware.empresa.pt/platform"),
        is_active: true,
    },
    Seed {
        id: "analytics",
        name: "Analytics Database",
        kind: "Data Warehouse",
        status: ConnectorStatus::Connected,
        minutes_since_sync: 2,
        record_count: "128,990 eventos",
        description: "Base de dados de analytics com métricas de performance e comportamento.",
        capabilities: ["Time Series", "Aggregations", "Machine Learning"],
        connection_string: Some("analytics-db.empresa.pt:5432"),
        is_active: true,
    },
    Seed {
        id: "sharepoint",
        name: "SharePoint Online",
        kind: "Collaboration Platform",
        status: ConnectorStatus::Disconnected,
        minutes_since_sync: 24 * 60,
        record_count: "0 registos",
        description: "Plataforma de colaboração Microsoft com documentos, listas e sites.",
        capabilities: ["Graph API", "Site Collections", "List Items"],
        connection_string: None,
        is_active: false,
    },
    Seed {
        id: "sql-server",
        name: "SQL Server Legacy",
        kind: "Database Server",
        status: ConnectorStatus::Error,
        minutes_since_sync: 12 * 60,
        record_count: "Unknown",
        description: "Servidor de base de dados legado com dados históricos da empresa.",
        capabilities: ["SQL Queries", "Stored Procedures", "Views"],
        connection_string: Some("legacy-sql.empresa.pt:1433"),
        is_active: false,
    },
];

/// Connector fixtures with sync times relative to `now_ms`.
pub fn sample_connectors(now_ms: i64) -> Vec<Connector> {
    SEEDS
        .iter()
        .map(|seed| Connector {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            kind: seed.kind.to_string(),
            status: seed.status,
            last_sync_ms: if seed.minutes_since_sync >= 60 {
                hours_ago(now_ms, seed.minutes_since_sync / 60)
            } else {
                minutes_ago(now_ms, seed.minutes_since_sync)
            },
            record_count: seed.record_count.to_string(),
            description: seed.description.to_string(),
            capabilities: seed.capabilities.iter().map(|c| c.to_string()).collect(),
            connection_string: seed.connection_string.map(str::to_string),
            is_active: seed.is_active,
        })
        .collect()
}

pub fn connector_templates() -> Vec<ConnectorTemplate> {
    vec![
        ConnectorTemplate { name: "MySQL Database", kind: "Database" },
        ConnectorTemplate { name: "PostgreSQL", kind: "Database" },
        ConnectorTemplate { name: "REST API", kind: "API" },
        ConnectorTemplate { name: "CSV File", kind: "File" },
        ConnectorTemplate { name: "Excel Workbook", kind: "File" },
        ConnectorTemplate { name: "Azure SQL", kind: "Cloud" },
    ]
}
