//! Conversions between the cube coordinate system and 2D pixel space. See
//! [crate::hex] for a description of both coordinate systems.
//!
//! Both directions of the conversion are linear maps between the `(x, y)`
//! components of a cube coordinate and a pixel position (`z` is implied by
//! `x` and `y`, so it doesn't participate). Each [Orientation] has its own
//! matrix, and converting back just applies the inverse matrix. The formulas
//! come from <https://www.redblobgames.com/grids/hexagons/#hex-to-pixel>.

mod unit;

pub use self::unit::Point;

use crate::{config::ProjectionConfig, hex::Cell};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, PI};
use strum::{EnumIter, EnumString};
use validator::Validate;

/// `sqrt(3)`. Not available as a stable std constant.
const SQRT_3: f64 = 1.732_050_807_568_877_2;
/// `sqrt(3) / 2`, the sine of 60°
const HALF_SQRT_3: f64 = SQRT_3 / 2.0;

/// Corner angles for [Orientation::Flat], in radians. Starts at the corner
/// pointing along `+x` and steps 60° counterclockwise.
const FLAT_VERTEX_ANGLES: [f64; 6] = [
    0.0,
    FRAC_PI_3,
    2.0 * FRAC_PI_3,
    PI,
    4.0 * FRAC_PI_3,
    5.0 * FRAC_PI_3,
];
/// Corner angles for [Orientation::Pointy], in radians. Same as the flat
/// table, rotated by 30°.
const POINTY_VERTEX_ANGLES: [f64; 6] = [
    FRAC_PI_6,
    FRAC_PI_2,
    5.0 * FRAC_PI_6,
    7.0 * FRAC_PI_6,
    3.0 * FRAC_PI_2,
    11.0 * FRAC_PI_6,
];

/// Unit vectors pointing at each corner in [FLAT_VERTEX_ANGLES]
const FLAT_VERTEX_OFFSETS: [Point; 6] = [
    Point::new(1.0, 0.0),
    Point::new(0.5, HALF_SQRT_3),
    Point::new(-0.5, HALF_SQRT_3),
    Point::new(-1.0, 0.0),
    Point::new(-0.5, -HALF_SQRT_3),
    Point::new(0.5, -HALF_SQRT_3),
];
/// Unit vectors pointing at each corner in [POINTY_VERTEX_ANGLES]
const POINTY_VERTEX_OFFSETS: [Point; 6] = [
    Point::new(HALF_SQRT_3, 0.5),
    Point::new(0.0, 1.0),
    Point::new(-HALF_SQRT_3, 0.5),
    Point::new(-HALF_SQRT_3, -0.5),
    Point::new(0.0, -1.0),
    Point::new(HALF_SQRT_3, -0.5),
];

/// The two ways to lay hexagons out in pixel space. This determines which
/// formula converts between cells and points, and where each hexagon's
/// corners sit.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Flat-topped hexagons. Columns of cells line up vertically.
    Flat,
    /// Pointy-topped hexagons. Rows of cells line up horizontally.
    #[serde(alias = "sharp")]
    #[strum(serialize = "pointy", serialize = "sharp")]
    Pointy,
}

impl Orientation {
    /// The matrix that maps cube `(x, y)` to pixel `(x, y)` for a hexagon
    /// radius of 1
    fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            // px = 3/2 x
            // py = sqrt(3) (y + x/2)
            Self::Flat => Matrix2::new(1.5, 0.0, HALF_SQRT_3, SQRT_3),
            // px = sqrt(3) (x + y/2)
            // py = 3/2 y
            Self::Pointy => Matrix2::new(SQRT_3, HALF_SQRT_3, 0.0, 1.5),
        }
    }

    /// The inverse of [Self::forward_matrix]. Spelled out rather than
    /// calculated so that we don't need to handle a (impossible) singular
    /// matrix.
    fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
            Self::Pointy => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
        }
    }

    /// The angle of each corner of a hexagon, in radians, measured
    /// counterclockwise from `+x`. Consecutive corners are 60° apart.
    pub fn vertex_angles(self) -> &'static [f64; 6] {
        match self {
            Self::Flat => &FLAT_VERTEX_ANGLES,
            Self::Pointy => &POINTY_VERTEX_ANGLES,
        }
    }

    /// A unit vector pointing from a hexagon's center to each of its corners.
    /// Scale by the hexagon radius to get actual corner offsets.
    pub fn vertex_offsets(self) -> &'static [Point; 6] {
        match self {
            Self::Flat => &FLAT_VERTEX_OFFSETS,
            Self::Pointy => &POINTY_VERTEX_OFFSETS,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Flat
    }
}

/// Get the pixel position of a cell's center. `radius` is the distance from
/// the center of a hexagon to any of its corners, and should be positive.
pub fn cell_to_point(
    cell: Cell,
    orientation: Orientation,
    radius: f64,
) -> Point {
    let cube = Vector2::new(f64::from(cell.x()), f64::from(cell.y()));
    (orientation.forward_matrix() * cube * radius).into()
}

/// Get the cell that contains a pixel position. This is the inverse of
/// [cell_to_point], e.g. for turning a mouse position into a cell selection.
/// `radius` should be positive.
///
/// The inverse conversion gives fractional cube coordinates, which are snapped
/// to the nearest cell with [Cell::round]. Points right on a boundary between
/// cells are resolved by the tie-breaking rules of that function.
pub fn point_to_cell(
    point: Point,
    orientation: Orientation,
    radius: f64,
) -> Cell {
    let cube = orientation.inverse_matrix() * Vector2::from(point) / radius;
    Cell::round(cube.x, cube.y, -cube.x - cube.y)
}

/// Get the pixel positions of a cell's six corners, in the same order as
/// [Orientation::vertex_angles]
pub fn corners(
    cell: Cell,
    orientation: Orientation,
    radius: f64,
) -> [Point; 6] {
    let center = cell_to_point(cell, orientation, radius);
    (*orientation.vertex_offsets()).map(|offset| center + offset * radius)
}

/// A validated set of pixel conversion parameters. This bundles the
/// orientation and radius together, and also allows the whole grid to be
/// shifted so that the origin cell is centered somewhere other than `(0, 0)`.
///
/// Config options cannot be changed after creating a projection, but
/// projections are very cheap to create so if you need to change the config,
/// just create a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    config: ProjectionConfig,
}

impl Projection {
    /// Initialize a new projection with the given options. Returns an error if
    /// the config is invalid.
    pub fn new(config: ProjectionConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Skip validation, for configs that have already been validated as part
    /// of a larger config
    pub(crate) fn new_unchecked(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the config that this projection uses
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Get the pixel position of a cell's center
    pub fn cell_to_point(&self, cell: Cell) -> Point {
        cell_to_point(cell, self.config.orientation, self.config.radius)
            + self.config.origin
    }

    /// Get the cell that contains a pixel position
    pub fn point_to_cell(&self, point: Point) -> Cell {
        point_to_cell(
            point - self.config.origin,
            self.config.orientation,
            self.config.radius,
        )
    }

    /// Get the pixel positions of a cell's six corners
    pub fn corners(&self, cell: Cell) -> [Point; 6] {
        corners(cell, self.config.orientation, self.config.radius)
            .map(|corner| corner + self.config.origin)
    }
}
