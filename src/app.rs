//! Root Dioxus application component
//!
//! Builds the shared [`AppState`] and mounts the router.

use crate::api::ApiClient;
use crate::route::Route;
use crate::storage::config::{load_config, AppConfig};
use crate::storage::session::{load_session, Session};
use crate::ui::guard::AuthGuard;
use dioxus::prelude::*;

/// Application state shared across screens
#[derive(Clone)]
pub struct AppState {
    pub config: Signal<AppConfig>,
    pub session: Signal<Session>,
    /// `None` when the HTTP client could not be built
    pub api: Option<ApiClient>,
    pub guard: AuthGuard,
}

impl AppState {
    pub fn load() -> Self {
        let config = load_config();
        let session = load_session();

        let api = match ApiClient::new(config.api_base_url.clone(), config.request_timeout()) {
            Ok(api) => Some(api),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                None
            }
        };

        tracing::info!(
            "AppState initialized (gateway: {}, signed in: {})",
            config.api_base_url,
            session.is_authenticated()
        );

        Self {
            config: Signal::new(config),
            session: Signal::new(session),
            api,
            guard: AuthGuard::new(Session::is_authenticated),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::load);

    rsx! {
        Router::<Route> {}
    }
}
