use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::phase::Phase;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapShapeError {
    #[error("roadmap has no phases")]
    NoPhases,

    #[error("phase {phase} marks step {step} complete but only has {len} steps")]
    CompletedStepOutOfRange {
        phase: usize,
        step: usize,
        len: usize,
    },
}

/// Out-of-range indices passed to [`RoadmapDocument::toggle_step`].
///
/// The presentation layer only ever toggles indices it enumerated from the
/// same document, so hitting one of these is a caller bug, not user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToggleError {
    #[error("phase index {index} out of range ({len} phases)")]
    PhaseOutOfRange { index: usize, len: usize },

    #[error("step index {index} out of range ({len} steps in phase {phase})")]
    StepOutOfRange {
        phase: usize,
        index: usize,
        len: usize,
    },
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// The full structured learning plan for one user.
///
/// Created once per successful fetch, owned by the active UI session, mutated
/// in place by [`toggle_step`](Self::toggle_step), and discarded on unmount or
/// re-fetch. Completion state is never persisted anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDocument {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub additional_resources: AdditionalResources,
}

impl RoadmapDocument {
    /// Structural shape check applied to every freshly fetched document.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapShapeError::NoPhases` when the phase list is empty and
    /// `RoadmapShapeError::CompletedStepOutOfRange` when a wire-provided
    /// completion index does not refer to an actionable step.
    pub fn validate(&self) -> Result<(), RoadmapShapeError> {
        if self.phases.is_empty() {
            return Err(RoadmapShapeError::NoPhases);
        }
        for (phase_index, phase) in self.phases.iter().enumerate() {
            let len = phase.actionable_steps.len();
            if let Some(&step) = phase.completed_steps.iter().next_back() {
                if step >= len {
                    return Err(RoadmapShapeError::CompletedStepOutOfRange {
                        phase: phase_index,
                        step,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Flip completion of one step. Returns the step's new completion state.
    ///
    /// Touches nothing but the addressed phase's `completed_steps`; on error
    /// the document is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns `ToggleError` when either index is out of range.
    pub fn toggle_step(
        &mut self,
        phase_index: usize,
        step_index: usize,
    ) -> Result<bool, ToggleError> {
        let phase_count = self.phases.len();
        let phase = self
            .phases
            .get_mut(phase_index)
            .ok_or(ToggleError::PhaseOutOfRange {
                index: phase_index,
                len: phase_count,
            })?;

        let step_count = phase.actionable_steps.len();
        if step_index >= step_count {
            return Err(ToggleError::StepOutOfRange {
                phase: phase_index,
                index: step_index,
                len: step_count,
            });
        }

        if phase.completed_steps.remove(&step_index) {
            Ok(false)
        } else {
            phase.completed_steps.insert(step_index);
            Ok(true)
        }
    }
}

/// Supplementary free-text resources rendered after the phases.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalResources {
    #[serde(default)]
    pub mentorship: String,
    #[serde(default)]
    pub community_support: String,
    #[serde(default)]
    pub job_search_strategies: String,
}
