pub mod admin;
pub mod connectors;
pub mod export;
pub mod history;
pub mod insights;
pub mod login;
pub mod notifications;
pub mod query;
pub mod shell;
pub mod smartquote;
pub mod widgets;
