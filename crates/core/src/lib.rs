//! Hexlattice is a library for working with hexagonal grids in cube
//! coordinates. It covers the cell coordinate type itself, sets of cells,
//! generators for common grid shapes, and conversion between cells and 2D
//! pixel positions for either hexagon orientation.
//!
//! ```
//! use hexlattice::{Cell, Grid, GridConfig, Point};
//!
//! let config = GridConfig::default();
//! let grid = Grid::generate(config).unwrap();
//! println!("{}", grid.len());
//!
//! // Figure out which cell a click landed in
//! assert_eq!(grid.pick(Point::new(0.1, -0.2)), Some(Cell::ORIGIN));
//! ```
//!
//! The lower-level pieces ([Cell], [Lattice], [layout], [pixel]) can all be
//! used on their own if [Grid] is more than you need. See [GridConfig] for
//! details on how a grid can be customized.

mod config;
mod error;
mod grid;
pub mod hex;
pub mod layout;
pub mod pixel;
mod util;

pub use crate::{
    config::{GridConfig, ProjectionConfig},
    error::HexError,
    grid::Grid,
    hex::{Cell, CellSet, Lattice, Side},
    layout::{Shape, ShapeDirection},
    pixel::{Orientation, Point, Projection},
};
