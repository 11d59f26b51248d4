use async_trait::async_trait;

use roadmap_core::model::{RoadmapDocument, ToggleError};

use crate::error::LoadError;
use crate::session::SessionContext;

/// Seam between the load state machine and the HTTP client so tests can
/// inject canned outcomes instead of a live service.
#[async_trait]
pub trait RoadmapFetch: Send + Sync {
    /// Retrieve the roadmap for the user carried by `session`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidData` for malformed payloads and
    /// `LoadError::Fetch` for transport or service failures.
    async fn fetch_roadmap(
        &self,
        session: &SessionContext,
    ) -> Result<RoadmapDocument, LoadError>;
}

/// Lifecycle of one roadmap retrieval.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(RoadmapDocument),
    Failed(LoadError),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Token for one in-flight fetch. A stale token settles as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State machine for the fetch/load lifecycle of one roadmap view.
///
/// `begin_load` hands out a ticket for the single mount-time request;
/// `settle` applies the outcome only while that ticket is current and the
/// session has not been torn down, so a response arriving after teardown or
/// after a newer load never lands on a stale view.
///
/// Completion toggles go through the session too, since a document only
/// exists once a load has settled in `Ready`.
#[derive(Debug, Default)]
pub struct RoadmapSession {
    state: LoadState,
    generation: u64,
    torn_down: bool,
}

impl RoadmapSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn document(&self) -> Option<&RoadmapDocument> {
        match &self.state {
            LoadState::Ready(document) => Some(document),
            _ => None,
        }
    }

    /// Enter `Loading` and return the ticket for the new in-flight request.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a fetch outcome. Returns whether it was applied; a stale ticket
    /// or a torn-down session discards the outcome without touching state.
    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        result: Result<RoadmapDocument, LoadError>,
    ) -> bool {
        if self.torn_down || ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(document) => LoadState::Ready(document),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Mark the consuming view as gone. Every later `settle` is a no-op.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
    }

    /// Flip completion of one step of the loaded document.
    ///
    /// # Errors
    ///
    /// Returns `ToggleError` on out-of-range indices. Outside `Ready` no
    /// phases exist from the caller's point of view, so any toggle is a
    /// phase-range violation.
    pub fn toggle_step(
        &mut self,
        phase_index: usize,
        step_index: usize,
    ) -> Result<bool, ToggleError> {
        match &mut self.state {
            LoadState::Ready(document) => document.toggle_step(phase_index, step_index),
            _ => Err(ToggleError::PhaseOutOfRange {
                index: phase_index,
                len: 0,
            }),
        }
    }
}
