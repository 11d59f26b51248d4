mod roadmap_vm;

pub use roadmap_vm::{CourseVm, PhaseVm, RoadmapVm, StepVm, project_roadmap};
