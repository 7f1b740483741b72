use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{info, warn};

use crate::models::Product;
use crate::services::auth::{
    authenticate, clear_session, encode_session, persist_session, restore_session,
};
use crate::services::format::now_ms;
use crate::state::{use_app_actions, use_app_state, AppActions};

use super::{blocking_alert, configured_delay};

/// Restores a stored session once, when the product root mounts.
pub fn use_session_restore() {
    let actions = use_app_actions();
    let product = use_app_state().read().product;

    use_future(move || async move {
        TimeoutFuture::new(0).await;
        actions.finish_restore(restore_session(product));
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginTrigger {
    Form,
    DemoShortcut,
}

#[derive(Clone, Copy)]
pub struct SessionRunner {
    product: Product,
    actions: AppActions,
}

impl SessionRunner {
    pub fn login(&self, email: String, password: String, trigger: LoginTrigger) {
        let SessionRunner { product, actions } = *self;
        let delay = match trigger {
            LoginTrigger::Form => configured_delay(|c| c.login_delay),
            LoginTrigger::DemoShortcut => configured_delay(|c| c.demo_login_delay),
        };

        actions.set_authenticating(true);
        spawn(async move {
            TimeoutFuture::new(delay).await;

            match authenticate(product, &email, &password) {
                Ok(user) => {
                    if let Err(err) = persist_session(product, &encode_session(&user, now_ms())) {
                        warn!(?err, "session not persisted");
                    }
                    actions.login_succeeded(user);
                }
                Err(err) => {
                    warn!(%email, ?trigger, %err, "login rejected");
                    actions.set_authenticating(false);
                    if err.is_blocking() {
                        blocking_alert(&err.to_string());
                    } else {
                        actions.set_operation_error("Início de sessão", err.to_string());
                    }
                }
            }
        });
    }

    pub fn logout(&self) {
        clear_session(self.product);
        self.actions.logout();
        info!(product = ?self.product, "logged out");
    }
}

pub fn use_session_runner() -> SessionRunner {
    SessionRunner {
        product: use_app_state().read().product,
        actions: use_app_actions(),
    }
}
