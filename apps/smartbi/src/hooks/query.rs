use std::future::Future;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{info, warn};

use crate::services::format::now_ms;
use crate::services::query::build_result;
use crate::state::{use_app_actions, use_app_state, AppActions, AppSignal};

use super::configured_delay;

#[derive(Clone, Copy)]
pub struct QueryRunner {
    state: AppSignal,
    actions: AppActions,
}

impl QueryRunner {
    /// Starts a simulated query. Returns `false` when nothing was submitted,
    /// so callers keep the input text.
    pub fn submit(&self, text: String) -> bool {
        let delay = configured_delay(|c| c.query_delay);
        info!(delay_ms = delay, "query delay");
        self.submit_after(text, async move { TimeoutFuture::new(delay).await })
    }

    /// The task lives on the scope that owns the app state, so switching
    /// tabs mid-flight still records the answer.
    pub(crate) fn submit_after(
        &self,
        text: String,
        delay: impl Future<Output = ()> + 'static,
    ) -> bool {
        let (busy, user_name) = {
            let snapshot = self.state.peek();
            (
                snapshot.query.is_processing,
                snapshot.session.user.as_ref().map(|u| u.name.clone()),
            )
        };
        let Some(user_name) = user_name else {
            return false;
        };
        if busy || text.trim().is_empty() {
            return false;
        }

        let actions = self.actions;
        actions.begin_query();
        info!(query = %text, "query submitted");

        let task = self.state.origin_scope().push_future(async move {
            delay.await;

            match build_result(&text, &user_name, now_ms()) {
                Ok(result) => {
                    info!(
                        id = %result.id,
                        source = %result.data_source,
                        kind = result.kind.as_str(),
                        "query answered"
                    );
                    actions.finish_query(result);
                }
                Err(err) => {
                    warn!(%err, "query dropped");
                    actions.abort_query();
                }
            }
        });

        if task.is_none() {
            warn!("state owner is gone; query not started");
            actions.abort_query();
            return false;
        }
        true
    }
}

pub fn use_query_runner() -> QueryRunner {
    QueryRunner {
        state: use_app_state(),
        actions: use_app_actions(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use super::*;
    use crate::fixtures::credentials::DEMO_PASSWORD;
    use crate::models::Product;
    use crate::services::auth::authenticate;
    use crate::state::{AppState, Tab};

    /// Pending on the first poll, ready on the second.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn signed_in(tab: Tab) -> AppState {
        let mut state = AppState::with_clock(Product::SmartBi, 0);
        state.session.is_restoring = false;
        state.session.user = authenticate(Product::SmartBi, "analista@smartbi.pt", DEMO_PASSWORD).ok();
        state.tab = tab;
        state
    }

    fn product_root() -> Element {
        let app_state = use_signal(|| signed_in(Tab::History));
        use_context_provider(|| app_state);
        let tab = app_state.read().active_tab();

        rsx! {
            if tab == Tab::History {
                RerunAndLeave {}
            }
        }
    }

    /// Re-runs a query and immediately switches tabs, unmounting itself.
    #[component]
    fn RerunAndLeave() -> Element {
        let runner = use_query_runner();
        let actions = use_app_actions();
        let fired = use_hook(|| Rc::new(Cell::new(false)));

        use_effect(move || {
            if fired.replace(true) {
                return;
            }
            let text = "Mostrar pedidos do Primavera".to_string();
            assert!(runner.submit_after(text, YieldOnce(false)));
            actions.set_tab(Tab::Query);
        });

        rsx! { p { "history" } }
    }

    #[test]
    fn query_survives_unmount_of_the_submitting_panel() {
        let mut dom = VirtualDom::new(product_root);
        dom.rebuild_in_place();
        for _ in 0..8 {
            dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
        }

        let state = dom.in_runtime(|| {
            ScopeId::APP
                .consume_context::<AppSignal>()
                .map(|signal| signal.peek().clone())
        });
        let state = state.expect("app state provided");
        assert_eq!(state.tab, Tab::Query);
        assert!(!state.query.is_processing);
        assert_eq!(state.query.history.len(), 1);
        assert_eq!(
            state.query.current.as_ref().map(|q| q.query.as_str()),
            Some("Mostrar pedidos do Primavera")
        );
    }

    #[test]
    fn signed_out_submit_is_ignored() {
        let mut dom = VirtualDom::new(|| {
            let app_state = use_signal(|| AppState::with_clock(Product::SmartBi, 0));
            use_context_provider(|| app_state);
            let runner = use_query_runner();
            let accepted = use_hook(|| runner.submit_after("pedidos".into(), YieldOnce(false)));
            rsx! { p { "{accepted}" } }
        });
        dom.rebuild_in_place();

        let processing = dom.in_runtime(|| {
            ScopeId::APP
                .consume_context::<AppSignal>()
                .map(|signal| signal.peek().query.is_processing)
        });
        assert_eq!(processing, Some(false));
    }
}
