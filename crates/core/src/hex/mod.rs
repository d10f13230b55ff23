//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play:
//!
//! ### Cube Coordinates
//!
//! Cube coordinates (AKA hex coordinates) address tiles within the grid. The
//! system is the [cube coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any cell,
//! all three components are integers and `x + y + z = 0`.** Hexagons tile a
//! two-dimensional plane, but we use three components anyway because it makes
//! the math around distance, adjacency and rounding much simpler. Every cell
//! is a point on the plane `x + y + z = 0`, and moving to an adjacent cell
//! always adds `+1` to one component and `-1` to another.
//!
//! A cell is the only addressable thing in this system. There's no notion of
//! a "partial" cell: fractional cube coordinates only exist transiently, while
//! converting from pixel space, and are snapped back onto the grid with
//! [Cell::round] before anyone gets to see them.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are plain 2D Cartesian coordinates, used when placing
//! cells on a screen or mapping a cursor position back onto the grid. See the
//! [crate::pixel] module for the conversions. They depend on two extra
//! parameters that the cube system doesn't care about:
//!
//! - Orientation: whether hexagons are drawn with a flat side or a point on
//!   top
//! - Radius: the distance from the center of a hexagon to any of its corners
//!
//! +-------------------+
//! |        +y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        -y         |
//! +-------------------+
//!
//! In the diagram above, `o` is the center of the origin cell `(0, 0, 0)`.

mod cell;
mod lattice;
mod side;

pub use self::{cell::*, lattice::*, side::*};
