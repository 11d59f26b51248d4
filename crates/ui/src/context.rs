use std::sync::Arc;

use services::{RoadmapFetch, SessionContext};

/// Composition seam between the binary and the UI.
///
/// The binary decides which fetcher and identity the UI gets; tests hand in
/// fakes through the same trait.
pub trait UiApp: Send + Sync {
    fn session_context(&self) -> SessionContext;
    fn roadmap_fetch(&self) -> Arc<dyn RoadmapFetch>;
}

#[derive(Clone)]
pub struct AppContext {
    identity: SessionContext,
    roadmap_fetch: Arc<dyn RoadmapFetch>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.session_context(),
            roadmap_fetch: app.roadmap_fetch(),
        }
    }

    #[must_use]
    pub fn session_context(&self) -> SessionContext {
        self.identity.clone()
    }

    #[must_use]
    pub fn roadmap_fetch(&self) -> Arc<dyn RoadmapFetch> {
        Arc::clone(&self.roadmap_fetch)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
