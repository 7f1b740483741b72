//! Canned query answering: the query text is inspected for a few keywords
//! and one of three prepared payloads is returned.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::fixtures::query::{
    canned_insights, monthly_satisfaction, pending_order_columns, pending_order_rows,
    ticket_categories,
};
use crate::models::{QueryResult, ResultKind, ResultPayload};

pub const DEFAULT_DATA_SOURCE: &str = "Analytics DB";

const SOURCE_KEYWORDS: [(&str, &str); 3] = [
    ("Primavera", "Primavera ERP"),
    ("GLPI", "GLPI"),
    ("DocuWare", "DocuWare"),
];

/// Matching is case-sensitive and the first keyword wins.
pub fn resolve_data_source(text: &str) -> &'static str {
    SOURCE_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, source)| *source)
        .unwrap_or(DEFAULT_DATA_SOURCE)
}

pub fn resolve_kind(text: &str) -> ResultKind {
    if text.contains("análise") || text.contains("correlação") {
        ResultKind::Chart
    } else {
        ResultKind::Table
    }
}

pub fn build_payload(text: &str) -> ResultPayload {
    if text.contains("pedidos") || text.contains("status") {
        ResultPayload::Table {
            columns: pending_order_columns(),
            rows: pending_order_rows(),
        }
    } else if text.contains("tickets") || text.contains("categoria") {
        ResultPayload::Bar {
            points: ticket_categories(),
        }
    } else {
        ResultPayload::Line {
            points: monthly_satisfaction(),
        }
    }
}

pub fn build_result(text: &str, user_name: &str, now_ms: i64) -> AppResult<QueryResult> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyQuery);
    }

    Ok(QueryResult {
        id: Uuid::new_v4().to_string(),
        query: text.to_string(),
        timestamp_ms: now_ms,
        user: user_name.to_string(),
        data_source: resolve_data_source(text).to_string(),
        kind: resolve_kind(text),
        payload: build_payload(text),
        insights: canned_insights(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::query::suggested_queries;

    #[test]
    fn data_source_follows_keyword_order() {
        assert_eq!(resolve_data_source("pedidos do Primavera no GLPI"), "Primavera ERP");
        assert_eq!(resolve_data_source("tickets do GLPI"), "GLPI");
        assert_eq!(resolve_data_source("arquivo DocuWare"), "DocuWare");
        assert_eq!(resolve_data_source("vendas por região"), "Analytics DB");
        assert_eq!(resolve_data_source("primavera em minúsculas"), "Analytics DB");
    }

    #[test]
    fn kind_is_chart_only_for_lowercase_analysis_keywords() {
        assert_eq!(resolve_kind("uma análise rápida"), ResultKind::Chart);
        assert_eq!(resolve_kind("ver correlação"), ResultKind::Chart);
        assert_eq!(resolve_kind("Análise de tickets"), ResultKind::Table);
        assert_eq!(resolve_kind("Mostrar pedidos"), ResultKind::Table);
    }

    #[test]
    fn payload_templates() {
        match build_payload("pedidos com status pendente") {
            ResultPayload::Table { columns, rows } => {
                assert_eq!(columns.len(), 6);
                assert_eq!(rows.len(), 5);
                assert_eq!(rows[3][1], "Empresa GHI");
            }
            other => panic!("expected table, got {other:?}"),
        }
        assert!(matches!(
            build_payload("tickets por categoria"),
            ResultPayload::Bar { ref points } if points.len() == 5
        ));
        assert!(matches!(
            build_payload("satisfação do cliente"),
            ResultPayload::Line { ref points } if points[4].month == "Mai"
        ));
    }

    #[test]
    fn suggested_queries_map_to_expected_templates() {
        let suggestions = suggested_queries();
        let results: Vec<_> = suggestions
            .iter()
            .map(|s| build_result(s.text, "Ana Costa", 0).unwrap())
            .collect();

        assert_eq!(results[0].data_source, "Primavera ERP");
        assert!(matches!(results[0].payload, ResultPayload::Table { .. }));
        assert_eq!(results[1].data_source, "GLPI");
        assert!(matches!(results[1].payload, ResultPayload::Bar { .. }));
        assert_eq!(results[2].data_source, "DocuWare");
        assert!(matches!(results[2].payload, ResultPayload::Line { .. }));
        assert_eq!(results[3].data_source, "Analytics DB");
        assert_eq!(results[3].kind, ResultKind::Table);
    }

    #[test]
    fn result_carries_user_timestamp_and_insights() {
        let result = build_result("correlação de vendas", "Miguel Santos", 42).unwrap();
        assert_eq!(result.user, "Miguel Santos");
        assert_eq!(result.timestamp_ms, 42);
        assert_eq!(result.kind, ResultKind::Chart);
        assert_eq!(result.insights.len(), 3);
        assert!(!result.id.is_empty());
    }

    #[test]
    fn ids_are_unique_per_submission() {
        let a = build_result("x", "u", 1).unwrap();
        let b = build_result("x", "u", 1).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert!(matches!(build_result("   \n", "u", 0), Err(AppError::EmptyQuery)));
    }
}
