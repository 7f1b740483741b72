use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_QUERY_DELAY_MS: u64 = 2_000;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1_500;
const DEFAULT_DEMO_LOGIN_DELAY_MS: u64 = 500;
const DEFAULT_ORGANIZATION: &str = "RCS Angola";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    pub log_level: String,
    pub organization: String,
    /// Artificial latency before a query result is shown.
    pub query_delay: Duration,
    pub login_delay: Duration,
    pub demo_login_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            log_level: "info".to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            query_delay: Duration::from_millis(DEFAULT_QUERY_DELAY_MS),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            demo_login_delay: Duration::from_millis(DEFAULT_DEMO_LOGIN_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call [`load_dotenv`] first on native
    /// targets so `.env` values are visible.
    pub fn from_env() -> Self {
        Self::from_lookup(read_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.profile = AppProfile::from_env(lookup("SMARTBI_PROFILE"));

        if let Some(level) = lookup("SMARTBI_LOG_LEVEL") {
            config.log_level = level.trim().to_lowercase();
        }

        if let Some(org) = lookup("SMARTBI_ORGANIZATION") {
            if !org.trim().is_empty() {
                config.organization = org.trim().to_string();
            }
        }

        if let Some(ms) = parse_millis(lookup("SMARTBI_QUERY_DELAY_MS")) {
            config.query_delay = Duration::from_millis(ms);
        }

        if let Some(ms) = parse_millis(lookup("SMARTBI_LOGIN_DELAY_MS")) {
            config.login_delay = Duration::from_millis(ms);
        }

        if let Some(ms) = parse_millis(lookup("SMARTBI_DEMO_LOGIN_DELAY_MS")) {
            config.demo_login_delay = Duration::from_millis(ms);
        }

        config
    }

    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" | "warning" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ if self.profile == AppProfile::Prod => tracing::Level::WARN,
            _ => tracing::Level::INFO,
        }
    }
}

/// Delays are capped at one minute.
fn parse_millis(value: Option<String>) -> Option<u64> {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(|ms| ms.min(60_000))
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "SMARTBI_PROFILE" => option_env!("SMARTBI_PROFILE"),
        "SMARTBI_LOG_LEVEL" => option_env!("SMARTBI_LOG_LEVEL"),
        "SMARTBI_ORGANIZATION" => option_env!("SMARTBI_ORGANIZATION"),
        "SMARTBI_QUERY_DELAY_MS" => option_env!("SMARTBI_QUERY_DELAY_MS"),
        "SMARTBI_LOGIN_DELAY_MS" => option_env!("SMARTBI_LOGIN_DELAY_MS"),
        "SMARTBI_DEMO_LOGIN_DELAY_MS" => option_env!("SMARTBI_DEMO_LOGIN_DELAY_MS"),
        _ => None,
    }
}

/// Loads `.env` into the process environment. Returns a description of the
/// failure when the file exists but cannot be used; the caller logs it once a
/// subscriber is installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Option<String> {
    dotenv_problem(dotenvy::dotenv())
}

#[cfg(not(target_arch = "wasm32"))]
fn dotenv_problem(result: dotenvy::Result<std::path::PathBuf>) -> Option<String> {
    match result {
        Ok(_) => None,
        Err(dotenvy::Error::Io(ref io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(err) => Some(err.to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_demo_timings() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.profile, AppProfile::Dev);
        assert_eq!(config.query_delay, Duration::from_millis(2_000));
        assert_eq!(config.login_delay, Duration::from_millis(1_500));
        assert_eq!(config.demo_login_delay, Duration::from_millis(500));
        assert_eq!(config.organization, "RCS Angola");
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SMARTBI_PROFILE", "production"),
            ("SMARTBI_QUERY_DELAY_MS", "250"),
            ("SMARTBI_LOG_LEVEL", " DEBUG "),
            ("SMARTBI_ORGANIZATION", "Acme"),
        ]));
        assert_eq!(config.profile, AppProfile::Prod);
        assert_eq!(config.query_delay, Duration::from_millis(250));
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config.organization, "Acme");
    }

    #[test]
    fn invalid_or_huge_delays_are_ignored_or_capped() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SMARTBI_QUERY_DELAY_MS", "soon"),
            ("SMARTBI_LOGIN_DELAY_MS", "999999"),
        ]));
        assert_eq!(config.query_delay, Duration::from_millis(2_000));
        assert_eq!(config.login_delay, Duration::from_millis(60_000));
    }

    #[test]
    fn prod_profile_defaults_to_warn() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SMARTBI_PROFILE", "prod"),
            ("SMARTBI_LOG_LEVEL", "verbose"),
        ]));
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn missing_dotenv_is_not_a_problem() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no .env");
        assert_eq!(dotenv_problem(Err(dotenvy::Error::Io(missing))), None);
        assert_eq!(dotenv_problem(Ok(".env".into())), None);
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let problem = dotenv_problem(Err(dotenvy::Error::LineParse("=oops".into(), 0)));
        assert!(problem.is_some());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(dotenv_problem(Err(dotenvy::Error::Io(denied))).is_some());
    }
}
