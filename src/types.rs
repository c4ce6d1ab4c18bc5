use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fatal initialization failures. Without a usable drawing surface there is
/// nothing meaningful for the placement UI to do, so these abort setup and
/// leave no listeners behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no drawing surface with id \"{id}\" in the document")]
    SurfaceNotFound { id: String },
    #[error("2d context unavailable on surface \"{id}\"")]
    ContextUnavailable { id: String },
}
