//! Derived completion percentages.
//!
//! Both functions are pure and cheap; callers recompute them on every render
//! so a toggle is reflected immediately. Nothing here is cached.

use crate::model::{Phase, RoadmapDocument};

/// Completion percentage for a single phase, rounded half-up.
///
/// A phase with no actionable steps reports 100: an empty checklist is
/// trivially satisfied.
#[must_use]
pub fn phase_progress(phase: &Phase) -> u8 {
    percent(phase.completed_count(), phase.step_count(), 100)
}

/// Completion percentage across all phases, rounded half-up.
///
/// A document with no steps at all (including no phases) reports 0.
#[must_use]
pub fn overall_progress(document: &RoadmapDocument) -> u8 {
    let total: usize = document.phases.iter().map(Phase::step_count).sum();
    let completed: usize = document.phases.iter().map(Phase::completed_count).sum();
    percent(completed, total, 0)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(completed: usize, total: usize, when_no_steps: u8) -> u8 {
    if total == 0 {
        return when_no_steps;
    }
    // completed <= total is a model invariant, so the result is in 0..=100.
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdditionalResources;

    fn phase(steps: usize, completed: &[usize]) -> Phase {
        Phase {
            phase_name: "Phase".into(),
            description: String::new(),
            actionable_steps: (0..steps).map(|i| format!("step {i}")).collect(),
            completed_steps: completed.iter().copied().collect(),
            recommended_courses: Vec::new(),
            industry_trends: String::new(),
        }
    }

    fn document(phases: Vec<Phase>) -> RoadmapDocument {
        RoadmapDocument {
            overview: String::new(),
            phases,
            additional_resources: AdditionalResources::default(),
        }
    }

    #[test]
    fn untouched_phase_is_zero_percent() {
        let doc = document(vec![phase(4, &[])]);
        assert_eq!(phase_progress(&doc.phases[0]), 0);
        assert_eq!(overall_progress(&doc), 0);
    }

    #[test]
    fn half_completed_phase_is_fifty_percent() {
        let p = phase(4, &[0, 2]);
        assert_eq!(phase_progress(&p), 50);
    }

    #[test]
    fn overall_sums_across_phases() {
        // 1/2 + 2/2 completed = 3/4 overall.
        let doc = document(vec![phase(2, &[0]), phase(2, &[0, 1])]);
        assert_eq!(overall_progress(&doc), 75);
    }

    #[test]
    fn rounding_is_half_up() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67, 1/8 = 12.5 -> 13.
        assert_eq!(phase_progress(&phase(3, &[0])), 33);
        assert_eq!(phase_progress(&phase(3, &[0, 1])), 67);
        assert_eq!(phase_progress(&phase(8, &[0])), 13);
    }

    #[test]
    fn empty_phase_counts_as_complete() {
        assert_eq!(phase_progress(&phase(0, &[])), 100);
    }

    #[test]
    fn document_with_only_empty_phases_is_zero_overall() {
        let doc = document(vec![phase(0, &[]), phase(0, &[])]);
        assert_eq!(overall_progress(&doc), 0);
    }

    #[test]
    fn progress_stays_in_percent_range() {
        let doc = document(vec![phase(3, &[0, 1, 2]), phase(5, &[4])]);
        for p in &doc.phases {
            assert!(phase_progress(p) <= 100);
        }
        assert!(overall_progress(&doc) <= 100);
    }

    #[test]
    fn progress_reflects_latest_toggle() {
        let mut doc = document(vec![phase(4, &[])]);
        doc.toggle_step(0, 0).unwrap();
        doc.toggle_step(0, 2).unwrap();
        assert_eq!(phase_progress(&doc.phases[0]), 50);
        doc.toggle_step(0, 2).unwrap();
        assert_eq!(phase_progress(&doc.phases[0]), 25);
    }
}
