use crate::models::{BarPoint, DataSourceSummary, LinePoint, SuggestedQuery};

pub fn suggested_queries() -> Vec<SuggestedQuery> {
    vec![
        SuggestedQuery {
            text: "Mostrar pedidos do Primavera com status pendente há mais de 5 dias",
            source: "ERP",
            complexity: "Simples",
        },
        SuggestedQuery {
            text: "Análise de tickets do GLPI por categoria nos últimos 3 meses",
            source: "GLPI",
            complexity: "Média",
        },
        SuggestedQuery {
            text: "Documentos aprovados no DocuWare por departamento este ano",
            source: "DocuWare",
            complexity: "Simples",
        },
        SuggestedQuery {
            text: "Correlação entre satisfação do cliente e tempo de resposta",
            source: "Analytics",
            complexity: "Avançada",
        },
    ]
}

pub fn data_source_summaries() -> Vec<DataSourceSummary> {
    vec![
        DataSourceSummary {
            name: "Primavera ERP",
            status: "Conectado",
            count: "15,423 registos",
        },
        DataSourceSummary {
            name: "GLPI",
            status: "Conectado",
            count: "8,901 tickets",
        },
        DataSourceSummary {
            name: "DocuWare",
            status: "Conectado",
            count: "45,123 documentos",
        },
        DataSourceSummary {
            name: "Analytics DB",
            status: "Conectado",
            count: "128,990 eventos",
        },
    ]
}

pub fn pending_order_columns() -> Vec<String> {
    ["ID", "Cliente", "Data", "Status", "Valor", "Dias Pendente"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn pending_order_rows() -> Vec<Vec<String>> {
    [
        ["PED-001", "Empresa ABC", "2024-01-10", "Pendente", "€12,450", "8"],
        ["PED-002", "Empresa XYZ", "2024-01-08", "Pendente", "€8,200", "10"],
        ["PED-003", "Empresa DEF", "2024-01-12", "Pendente", "€15,600", "6"],
        ["PED-004", "Empresa GHI", "2024-01-05", "Pendente", "€22,100", "13"],
        ["PED-005", "Empresa JKL", "2024-01-09", "Pendente", "€9,800", "9"],
    ]
    .iter()
    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
    .collect()
}

pub fn ticket_categories() -> Vec<BarPoint> {
    [
        ("Hardware", 145, "+12%"),
        ("Software", 89, "-3%"),
        ("Rede", 67, "+8%"),
        ("Acesso", 234, "+15%"),
        ("Outros", 45, "-1%"),
    ]
    .into_iter()
    .map(|(name, value, trend)| BarPoint {
        name: name.to_string(),
        value,
        trend: trend.to_string(),
    })
    .collect()
}

pub fn monthly_satisfaction() -> Vec<LinePoint> {
    [
        ("Jan", 4200, 8.2),
        ("Fev", 3800, 7.9),
        ("Mar", 5100, 8.7),
        ("Abr", 4600, 8.1),
        ("Mai", 5400, 9.1),
    ]
    .into_iter()
    .map(|(month, value, satisfaction)| LinePoint {
        month: month.to_string(),
        value,
        satisfaction,
    })
    .collect()
}

pub fn canned_insights() -> Vec<String> {
    vec![
        "13% dos pedidos estão pendentes há mais de 7 dias".to_string(),
        "Maior volume de pedidos pendentes em Janeiro (+25%)".to_string(),
        "Cliente Empresa GHI tem maior valor médio de pedidos".to_string(),
    ]
}
