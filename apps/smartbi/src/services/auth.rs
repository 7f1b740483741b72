use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::fixtures::credentials::demo_credentials;
use crate::models::{Product, User};

/// Shape persisted in local storage after a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionBlob {
    pub user: User,
    pub timestamp: i64,
}

pub fn authenticate(product: Product, email: &str, password: &str) -> AppResult<User> {
    demo_credentials(product)
        .iter()
        .find(|cred| cred.email == email && cred.password == password)
        .map(|cred| User {
            email: cred.email.to_string(),
            name: cred.name.to_string(),
            role: cred.role,
        })
        .ok_or(AppError::InvalidCredentials)
}

pub fn encode_session(user: &User, now_ms: i64) -> SessionBlob {
    SessionBlob {
        user: user.clone(),
        timestamp: now_ms,
    }
}

pub fn decode_session(raw: &str) -> AppResult<SessionBlob> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
pub fn persist_session(product: Product, blob: &SessionBlob) -> AppResult<()> {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::set(product.storage_key(), blob)
        .map_err(|err| AppError::Storage(err.to_string()))?;
    info!(product = ?product, email = %blob.user.email, "session persisted");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist_session(product: Product, blob: &SessionBlob) -> AppResult<()> {
    info!(product = ?product, email = %blob.user.email, "session kept in memory (no browser storage)");
    Ok(())
}

/// Reads the stored session. No expiry is enforced; a malformed blob is
/// discarded and treated as logged out.
#[cfg(target_arch = "wasm32")]
pub fn restore_session(product: Product) -> Option<User> {
    use gloo_storage::{LocalStorage, Storage};

    let raw = match LocalStorage::raw().get_item(product.storage_key()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(product = ?product, ?err, "local storage unavailable");
            return None;
        }
    };

    match decode_session(&raw) {
        Ok(blob) => {
            info!(product = ?product, email = %blob.user.email, "session restored");
            Some(blob.user)
        }
        Err(err) => {
            tracing::warn!(product = ?product, %err, "discarding stored session");
            clear_session(product);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn restore_session(_product: Product) -> Option<User> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn clear_session(product: Product) {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::delete(product.storage_key());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session(_product: Product) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::credentials::DEMO_PASSWORD;
    use crate::models::Role;

    #[test]
    fn every_smartbi_demo_pair_authenticates_with_its_role() {
        let cases = [
            ("analista@smartbi.pt", "Ana Costa", Role::Analyst),
            ("gestor@smartbi.pt", "Miguel Santos", Role::Manager),
            ("admin@smartbi.pt", "Carlos Ferreira", Role::Admin),
        ];
        for (email, name, role) in cases {
            let user = authenticate(Product::SmartBi, email, DEMO_PASSWORD).unwrap();
            assert_eq!(user.email, email);
            assert_eq!(user.name, name);
            assert_eq!(user.role, role);
        }
    }

    #[test]
    fn smartquote_accounts_are_separate() {
        let user = authenticate(Product::SmartQuote, "admin@rcs.pt", "demo123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(authenticate(Product::SmartBi, "admin@rcs.pt", "demo123").is_err());
        assert!(authenticate(Product::SmartQuote, "admin@smartbi.pt", "demo123").is_err());
    }

    #[test]
    fn unknown_pairs_are_rejected() {
        for (email, password) in [
            ("analista@smartbi.pt", "wrong"),
            ("ghost@smartbi.pt", "demo123"),
            ("ANALISTA@smartbi.pt", "demo123"),
            ("", ""),
        ] {
            let err = authenticate(Product::SmartBi, email, password).unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
        }
    }

    #[test]
    fn session_blob_uses_user_and_timestamp_fields() {
        let user = authenticate(Product::SmartBi, "gestor@smartbi.pt", "demo123").unwrap();
        let blob = encode_session(&user, 1_700_000_000_000);
        let raw = serde_json::to_string(&blob).unwrap();
        assert!(raw.contains("\"timestamp\":1700000000000"));
        assert!(raw.contains("\"role\":\"manager\""));
        assert_eq!(decode_session(&raw).unwrap(), blob);
    }

    #[test]
    fn malformed_session_is_reported_as_corrupt() {
        for raw in ["not json", "{\"user\":{\"email\":\"x\"}}", "{\"timestamp\":1}"] {
            let err = decode_session(raw).unwrap_err();
            assert!(matches!(err, AppError::CorruptSession(_)), "{raw}");
        }
    }
}
