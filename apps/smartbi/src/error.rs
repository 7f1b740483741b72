use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Credenciais inválidas. Verifique as credenciais de demonstração.")]
    InvalidCredentials,
    #[error("sessão armazenada inválida: {0}")]
    CorruptSession(#[from] serde_json::Error),
    #[error("armazenamento local indisponível: {0}")]
    Storage(String),
    #[error("a consulta está vazia")]
    EmptyQuery,
    #[error("{0}")]
    ExportValidation(String),
}

impl AppError {
    /// Errors shown to the user as a blocking dialog.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::ExportValidation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_error_carries_user_facing_message() {
        let err = AppError::InvalidCredentials;
        assert_eq!(
            err.to_string(),
            "Credenciais inválidas. Verifique as credenciais de demonstração."
        );
        assert!(err.is_blocking());
    }

    #[test]
    fn serde_errors_convert_into_corrupt_session() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse.into();
        assert!(matches!(err, AppError::CorruptSession(_)));
        assert!(!err.is_blocking());
    }
}
