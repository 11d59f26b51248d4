use roadmap_core::model::{Course, Phase, RoadmapDocument};
use roadmap_core::{overall_progress, phase_progress};

/// Render-ready projection of a loaded roadmap.
///
/// Deterministic for a given document: phases and steps keep their document
/// order, and every percentage is recomputed from the current completion
/// sets, so the projection after a toggle is always current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapVm {
    pub overview: String,
    pub overall_percent: u8,
    pub phases: Vec<PhaseVm>,
    pub mentorship: String,
    pub community_support: String,
    pub job_search_strategies: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseVm {
    pub name: String,
    pub description: String,
    pub percent: u8,
    pub steps: Vec<StepVm>,
    pub courses: Vec<CourseVm>,
    pub industry_trends: String,
}

/// One checkbox row; the indices are the toggle handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub label: String,
    pub done: bool,
    pub phase_index: usize,
    pub step_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseVm {
    pub title: String,
    pub link: String,
    /// Pre-formatted "platform | duration | price" line.
    pub meta: String,
}

impl From<&Course> for CourseVm {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            link: course.link.clone(),
            meta: format!("{} | {} | {}", course.platform, course.duration, course.price),
        }
    }
}

fn project_phase(phase_index: usize, phase: &Phase) -> PhaseVm {
    PhaseVm {
        name: phase.phase_name.clone(),
        description: phase.description.clone(),
        percent: phase_progress(phase),
        steps: phase
            .actionable_steps
            .iter()
            .enumerate()
            .map(|(step_index, label)| StepVm {
                label: label.clone(),
                done: phase.is_step_completed(step_index),
                phase_index,
                step_index,
            })
            .collect(),
        courses: phase.recommended_courses.iter().map(CourseVm::from).collect(),
        industry_trends: phase.industry_trends.clone(),
    }
}

#[must_use]
pub fn project_roadmap(document: &RoadmapDocument) -> RoadmapVm {
    RoadmapVm {
        overview: document.overview.clone(),
        overall_percent: overall_progress(document),
        phases: document
            .phases
            .iter()
            .enumerate()
            .map(|(phase_index, phase)| project_phase(phase_index, phase))
            .collect(),
        mentorship: document.additional_resources.mentorship.clone(),
        community_support: document.additional_resources.community_support.clone(),
        job_search_strategies: document.additional_resources.job_search_strategies.clone(),
    }
}
