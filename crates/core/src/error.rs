use thiserror::Error;

use crate::model::RoadmapShapeError;
use crate::model::ToggleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] RoadmapShapeError),
    #[error(transparent)]
    Toggle(#[from] ToggleError),
}
