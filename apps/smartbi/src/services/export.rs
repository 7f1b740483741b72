use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::fixtures::exports::export_formats;

pub const MISSING_SELECTION: &str =
    "Selecione pelo menos uma consulta e um formato de exportação.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportRequest {
    pub query_ids: Vec<String>,
    pub format: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
}

impl ExportRequest {
    pub fn confirmation(&self) -> String {
        format!(
            "Exportação criada com sucesso! {} consulta(s) serão exportadas em formato {}.",
            self.query_ids.len(),
            self.format
        )
    }
}

pub fn validate_export(
    query_ids: &[String],
    format: Option<&str>,
    name: &str,
    description: &str,
    recipients: Option<&str>,
) -> AppResult<ExportRequest> {
    let format = match format {
        Some(id) if !query_ids.is_empty() && export_formats().iter().any(|f| f.id == id) => id,
        _ => return Err(AppError::ExportValidation(MISSING_SELECTION.to_string())),
    };

    Ok(ExportRequest {
        query_ids: query_ids.to_vec(),
        format: format.to_string(),
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        recipients: recipients.map(split_recipients).unwrap_or_default(),
    })
}

/// Comma or semicolon separated addresses; blanks are dropped.
pub fn split_recipients(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn requires_selection_and_format() {
        for (selected, format) in [
            (ids(&[]), Some("csv")),
            (ids(&["q1"]), None),
            (ids(&[]), None),
            (ids(&["q1"]), Some("docx")),
        ] {
            let err = validate_export(&selected, format, "", "", None).unwrap_err();
            match err {
                AppError::ExportValidation(message) => assert_eq!(message, MISSING_SELECTION),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn confirmation_counts_queries() {
        let request =
            validate_export(&ids(&["a", "b"]), Some("excel"), " Mensal ", "", None).unwrap();
        assert_eq!(request.name, "Mensal");
        assert_eq!(
            request.confirmation(),
            "Exportação criada com sucesso! 2 consulta(s) serão exportadas em formato excel."
        );
    }

    #[test]
    fn recipients_are_split_when_scheduled() {
        let request = validate_export(
            &ids(&["a"]),
            Some("pdf"),
            "",
            "",
            Some("ana@empresa.pt; miguel@empresa.pt, ,"),
        )
        .unwrap();
        assert_eq!(request.recipients, ids(&["ana@empresa.pt", "miguel@empresa.pt"]));
    }
}
