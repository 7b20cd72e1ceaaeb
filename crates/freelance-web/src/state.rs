use freelance_core::{AppState, CONFIG, Notice, Result};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::browser::BrowserStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Shared handles provided at the root of the app
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState<BrowserStorage>>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    /// Show a toast that dismisses itself after the configured duration
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toasts = self.toasts;
        Timeout::new(CONFIG.toast_duration_ms, move || {
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Run a state mutation; on failure log it and show a toast
    pub fn mutate(&self, f: impl FnOnce(&mut AppState<BrowserStorage>) -> Result<()>) -> bool {
        let mut outcome = Ok(());
        self.state.update(|state| outcome = f(state));
        match outcome {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", e);
                self.notify(Notice::from(e));
                false
            }
        }
    }
}

pub fn provide_app_context() {
    provide_context(AppContext {
        state: RwSignal::new(AppState::load(BrowserStorage)),
        toasts: RwSignal::new(Vec::new()),
        next_toast_id: StoredValue::new(0),
    });
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
