mod phase;
mod roadmap;

pub use phase::{Course, Phase};
pub use roadmap::{AdditionalResources, RoadmapDocument, RoadmapShapeError, ToggleError};
