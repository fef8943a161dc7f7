//! Application state

use bookstore_core::{BookApi, CatalogClient, ClientConfig, Effect, HttpBookApi};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Backend handle shared by the session and the health probe
pub type SharedApi = Arc<dyn BookApi>;

/// The catalog session behind the page
pub type Session = CatalogClient<SharedApi>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// REST backend
    pub api: SharedApi,

    /// The page's UI session; one operation runs at a time
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Create state around an existing backend handle
    pub fn new(api: SharedApi, config: ClientConfig) -> Self {
        let session = CatalogClient::new(api.clone(), config);
        Self {
            api,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Create state talking to the configured REST backend over HTTP
    pub fn from_config(config: ClientConfig) -> Self {
        tracing::info!(api_url = %config.api_url, variant = ?config.variant, "Using REST backend");
        let api: SharedApi = Arc::new(HttpBookApi::new(config.api_url.clone()));
        Self::new(api, config)
    }

    /// Run timer effects in the background once their delay elapses.
    ///
    /// A fired timer may yield more work (a removal animation ends in a
    /// toast and a refresh); that is settled and scheduled in turn.
    pub fn schedule(&self, timers: Vec<Effect>) {
        for effect in timers {
            let state = self.clone();
            tokio::spawn(async move {
                if let Some(delay) = effect.delay() {
                    tokio::time::sleep(delay).await;
                }
                let mut session = state.session.lock().await;
                let follow_up = session.fire(effect).await;
                let timers = session.settle(follow_up).await;
                drop(session);
                state.schedule(timers);
            });
        }
    }
}
