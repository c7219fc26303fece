use serde::Serialize;

use crate::models::Shape;

/// A single ingredient icon positioned on the plate canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPlacement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub shape: Shape,
    pub label: String,

    /// False when every attempt was rejected and the last candidate was kept.
    pub accepted: bool,
}
