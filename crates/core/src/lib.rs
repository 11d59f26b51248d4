#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;

pub use error::Error;
pub use model::{AdditionalResources, Course, Phase, RoadmapDocument};
pub use progress::{overall_progress, phase_progress};
