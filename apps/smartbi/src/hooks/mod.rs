pub mod query;
pub mod session;

use std::time::Duration;

use crate::config::AppConfig;
use crate::APP_CONFIG;

/// Reads one of the configured delays as timer milliseconds.
pub(crate) fn configured_delay(pick: impl Fn(&AppConfig) -> Duration) -> u32 {
    let delay = match APP_CONFIG.get() {
        Some(config) => pick(config),
        None => pick(&AppConfig::default()),
    };
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Shows a modal browser alert. Native builds only log the message.
#[cfg(target_arch = "wasm32")]
pub fn blocking_alert(message: &str) {
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        tracing::warn!(%message, "unable to show alert");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn blocking_alert(message: &str) {
    tracing::info!(%message, "alert");
}
