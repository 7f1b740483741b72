#![allow(non_snake_case)]

mod config;
mod error;
mod fixtures;
mod hooks;
mod models;
mod services;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use models::Product;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::{info, warn};
use ui::shell::ProductGate;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let dotenv_problem = config::load_dotenv();
    let config = AppConfig::from_env();
    init_logging(config.tracing_level());
    if let Some(problem) = dotenv_problem {
        warn!(%problem, "failed to load .env");
    }
    info!(profile = ?config.profile, organization = %config.organization, "configuration loaded");
    let _ = APP_CONFIG.set(config);
    launch(App);
}

fn init_logging(level: tracing::Level) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    SmartBi {},
    #[route("/rcs")]
    SmartQuote {},
}

#[component]
fn SmartBi() -> Element {
    let app_state = use_signal(|| AppState::new(Product::SmartBi));
    use_context_provider(|| app_state);

    rsx! { ProductGate {} }
}

#[component]
fn SmartQuote() -> Element {
    let app_state = use_signal(|| AppState::new(Product::SmartQuote));
    use_context_provider(|| app_state);

    rsx! { ProductGate {} }
}
