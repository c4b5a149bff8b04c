use crate::api::{ApiClient, EnvConfig};
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: ApiClient,

    /// Read once from `window.ENV` at startup.
    pub config: EnvConfig,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        log::debug!(
            "form config: api_url={} photos={}",
            config.api_url,
            config.photos.len()
        );

        Self {
            api_client: ApiClient::from_env(&config),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Callbacks run synchronously from the form's `submit` handler, before the
/// browser serialises the form.
#[derive(Clone, Copy)]
pub(crate) struct SubmitHooks(StoredValue<Vec<Callback<()>>>);

impl SubmitHooks {
    pub fn new() -> Self {
        Self(StoredValue::new(vec![]))
    }

    pub fn register(&self, hook: Callback<()>) {
        self.0.update_value(|hooks| hooks.push(hook));
    }

    pub fn run_all(&self) {
        // Copy out first so a hook may register another without re-borrowing.
        let hooks = self.0.get_value();
        for hook in hooks {
            hook.run(());
        }
    }
}

impl Default for SubmitHooks {
    fn default() -> Self {
        Self::new()
    }
}
