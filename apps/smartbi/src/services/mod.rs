pub mod auth;
pub mod export;
pub mod format;
pub mod query;
