use crate::{
    layout::Shape,
    pixel::{Orientation, Point},
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a grid. Two grids generated with the same config
/// will always be identical.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// The shape of the region of cells that makes up the grid. Shapes are
    /// always generated around the origin cell `(0, 0, 0)`.
    pub shape: Shape,

    /// Config for mapping cells in the grid to pixel space and back
    #[validate]
    pub projection: ProjectionConfig,
}

/// Configuration for converting between cells and pixel positions. These
/// options have absolutely no bearing on which cells are in a grid, only on
/// where those cells are drawn (and which cell a pixel belongs to).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Whether hexagons have a flat side or a point on top
    pub orientation: Orientation,

    /// Distance between the center of a hexagon and one of its 6 corners, in
    /// pixel space. This is also the length of one side of the hexagon. Must
    /// be finite.
    #[validate(range(min = 0.001), custom = "validate_finite")]
    pub radius: f64,

    /// Pixel position of the center of the origin cell
    pub origin: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            projection: ProjectionConfig::default(),
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Flat,
            radius: 1.0,
            origin: Point::ORIGIN,
        }
    }
}

/// Range checks let NaN through, since every comparison against it fails
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
