use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One stage of a learning roadmap.
///
/// Steps carry no stable identifier: a step is referenced solely by its
/// position in `actionable_steps`. `completed_steps` holds the positions
/// marked done; it is absent on the wire until the user has toggled
/// something, so it defaults to the empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    #[serde(default)]
    pub phase_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub actionable_steps: Vec<String>,
    #[serde(default)]
    pub completed_steps: BTreeSet<usize>,
    #[serde(default)]
    pub recommended_courses: Vec<Course>,
    #[serde(default)]
    pub industry_trends: String,
}

impl Phase {
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.actionable_steps.len()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    /// Whether the step at `step_index` is marked done.
    #[must_use]
    pub fn is_step_completed(&self, step_index: usize) -> bool {
        self.completed_steps.contains(&step_index)
    }
}

/// A recommended course attached to a phase. All fields are display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: String,
}
