//! The cell type, which addresses a single tile on the grid. See the parent
//! module documentation for more info on the coordinate system.

use crate::{hex::Side, HexError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops;

/// A single tile in the hex grid, addressed by its cube coordinates.
///
/// ## Implementation
///
/// Every cell falls on the plane `x + y + z = 0`, so this struct only needs to
/// store `x` and `y` and can derive `z` as needed. Besides saving a third of
/// the memory, this makes it impossible for an already-constructed cell to
/// break the invariant. The only way to get an invalid triple past the
/// constructor is to never construct it: [Cell::new] rejects it up front.
///
/// Cells are plain values. Two cells are equal iff all three components are
/// equal, and hashing covers the full coordinate, so cells make good set/map
/// keys.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "cell({}, {}, {})", "self.x()", "self.y()", "self.z()")]
#[serde(try_from = "CellComponents")]
pub struct Cell {
    x: i32,
    y: i32,
}

/// Unchecked serialized form of [Cell], which gets validated on the way in
#[derive(Deserialize)]
#[serde(rename = "Cell")]
struct CellComponents {
    x: i32,
    y: i32,
}

impl TryFrom<CellComponents> for Cell {
    type Error = HexError;

    fn try_from(value: CellComponents) -> Result<Self, Self::Error> {
        let CellComponents { x, y } = value;
        let z = -(i64::from(x) + i64::from(y));
        // A clamped z is off the plane, which gets rejected below
        let z = z.clamp(i32::MIN.into(), i32::MAX.into()) as i32;
        Self::new(x, y, z)
    }
}

impl Cell {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new cell from all three cube components. Returns an error
    /// if the components don't sum to zero, or if `x + y` doesn't fit in an
    /// `i32`.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, HexError> {
        // Sum in a wider type so that absurd inputs get rejected instead of
        // overflowing
        let on_plane = i64::from(x) + i64::from(y) + i64::from(z) == 0;
        // z is re-derived from x+y on every access, so that has to fit too
        if on_plane && x.checked_add(y).is_some() {
            Ok(Self::new_xy(x, y))
        } else {
            Err(HexError::InvalidCell { x, y, z })
        }
    }

    /// Construct a new cell with the given x and y. Since x+y+z=0 for all
    /// cells, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new cell with the given x and z. Since x+y+z=0 for all
    /// cells, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new cell with the given y and z. Since x+y+z=0 for all
    /// cells, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    pub const fn z(self) -> i32 {
        -(self.x + self.y)
    }

    /// Snap a fractional cube coordinate to the nearest cell. The input
    /// should be roughly on the plane `x + y + z = 0`, e.g. the output of a
    /// pixel conversion, but doesn't need to be exact.
    ///
    /// Each component is rounded on its own, which can knock the triple off
    /// the plane. To fix that, we throw away whichever component moved the
    /// most during rounding and re-derive it from the other two. That keeps
    /// the total distortion as small as possible.
    ///
    /// Ties are broken in a fixed order: `x` is only re-derived if its delta
    /// is strictly the largest, then `y` if its delta strictly beats `z`'s,
    /// otherwise `z`. Cells along tile boundaries depend on this order, so
    /// don't change it.
    pub fn round(x: f64, y: f64, z: f64) -> Self {
        let rx = x.round();
        let ry = y.round();
        let rz = z.round();
        let dx = (x - rx).abs();
        let dy = (y - ry).abs();
        let dz = (z - rz).abs();

        if dx > dy && dx > dz {
            Self::new_yz(ry as i32, rz as i32)
        } else if dy > dz {
            Self::new_xz(rx as i32, rz as i32)
        } else {
            Self::new_xy(rx as i32, ry as i32)
        }
    }

    /// Scale this cell by a float factor, rounding each component to the
    /// nearest integer independently. Unlike integer scaling, this can push
    /// the result off the plane `x + y + z = 0` (e.g. `(1, 1, -2) * 0.5`), in
    /// which case an error is returned. Use [Self::scale_round] if you want
    /// the nearest valid cell instead.
    pub fn scale(self, factor: f64) -> Result<Self, HexError> {
        let scale = |component: i32| (f64::from(component) * factor).round();
        Self::new(
            scale(self.x()) as i32,
            scale(self.y()) as i32,
            scale(self.z()) as i32,
        )
    }

    /// Scale this cell by a float factor, then snap the result to the nearest
    /// cell with [Self::round]. This is always valid, but may differ from
    /// [Self::scale] where that would succeed only by coincidence.
    pub fn scale_round(self, factor: f64) -> Self {
        Self::round(
            f64::from(self.x()) * factor,
            f64::from(self.y()) * factor,
            f64::from(self.z()) * factor,
        )
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the cells are equal,
    /// 1 if they're adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance(self, other: Cell) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let delta = |a: i32, b: i32| u64::from(a.abs_diff(b));
        ((delta(self.x(), other.x())
            + delta(self.y(), other.y())
            + delta(self.z(), other.z()))
            // IMPORTANT: We divide by 2 here because two adjacent cells are
            // always separated by two cube edges
            / 2) as usize
    }

    /// Get the cell on the other side of one of this cell's sides
    pub fn neighbor(self, side: Side) -> Cell {
        self + side.offset()
    }

    /// Get an iterator of all the cells directly adjacent to this one, in side
    /// order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Side::ALL.into_iter().map(move |side| self.neighbor(side))
    }
}

// Adding or subtracting two cells on the plane always lands on the plane, so
// none of these need validation

impl ops::Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Self::Output {
        Self::new_xy(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Self::Output {
        Self::new_xy(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::AddAssign for Cell {
    fn add_assign(&mut self, rhs: Cell) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Cell {
    fn sub_assign(&mut self, rhs: Cell) {
        *self = *self - rhs;
    }
}

impl ops::Neg for Cell {
    type Output = Cell;

    fn neg(self) -> Self::Output {
        Self::new_xy(-self.x, -self.y)
    }
}

// Integer scaling stays on the plane: kx + ky + kz = k(x + y + z) = 0
impl ops::Mul<i32> for Cell {
    type Output = Cell;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new_xy(self.x * rhs, self.y * rhs)
    }
}
