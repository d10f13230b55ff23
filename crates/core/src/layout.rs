//! Generators for common grid shapes. Each generator is a pure function that
//! builds a fresh [Lattice] from a few size parameters. For simple use cases,
//! [Shape] bundles a generator and its parameters into a single serializable
//! value, which is what [crate::GridConfig] uses.

use crate::hex::{Cell, Lattice};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp;
use strum::{EnumIter, EnumString};

/// Selects which permutation of `(x, y, z)` is used when laying out
/// parallelograms and triangles. For parallelograms, the same size parameters
/// produce the same number of cells in every direction, just aligned along a
/// different pair of axes. Triangles only support [Self::Standard] and
/// [Self::Flipped]; see [triangular].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
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
pub enum ShapeDirection {
    #[default]
    Standard,
    Flipped,
    Vertical,
}

/// A description of a grid shape, which can be turned into a lattice with
/// [Shape::generate]. See the generator function for each variant for a
/// description of what it produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// See [hexagonal]
    Hexagonal { radius: u16 },
    /// See [rectangular]
    Rectangular { width: u16, height: u16 },
    /// See [parallelogram]
    Parallelogram {
        width: u16,
        height: u16,
        #[serde(default)]
        direction: ShapeDirection,
    },
    /// See [triangular]
    Triangular {
        base: u16,
        #[serde(default)]
        direction: ShapeDirection,
    },
}

impl Shape {
    /// Build a lattice of this shape
    pub fn generate(self) -> Lattice {
        match self {
            Self::Hexagonal { radius } => hexagonal(radius),
            Self::Rectangular { width, height } => rectangular(width, height),
            Self::Parallelogram {
                width,
                height,
                direction,
            } => parallelogram(width, height, direction),
            Self::Triangular { base, direction } => triangular(base, direction),
        }
    }

    /// The number of cells that [Self::generate] will produce
    pub fn len(self) -> usize {
        match self {
            Self::Hexagonal { radius } => hexagonal_len(radius),
            Self::Rectangular { width, height } => {
                usize::from(width) * usize::from(height)
            }
            Self::Parallelogram { width, height, .. } => {
                // Both dimensions are halved then mirrored around 0
                let w = usize::from(width / 2);
                let h = usize::from(height / 2);
                (2 * w + 1) * (2 * h + 1)
            }
            Self::Triangular {
                direction: ShapeDirection::Vertical,
                ..
            } => 0,
            Self::Triangular { base, .. } => {
                let b = usize::from(base);
                (b + 1) * (b + 2) / 2
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::Hexagonal { radius: 10 }
    }
}

/// Calculate the number of cells in a hexagon of the given radius. Radius 0
/// means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub fn hexagonal_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = usize::from(radius);
    3 * r * r + 3 * r + 1
}

/// Generate a hexagon-shaped region: every cell within `radius` steps of the
/// origin. 0 means just the origin, 1 is the origin plus its 6 neighbors, etc.
pub fn hexagonal(radius: u16) -> Lattice {
    let mut lattice = Lattice::with_capacity(hexagonal_len(radius));
    let r = i32::from(radius);
    for x in -r..=r {
        // If we just do [-r,r] for y as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let y_min = cmp::max(-r, -x - r);
        let y_max = cmp::min(r, -x + r);
        for y in y_min..=y_max {
            lattice.insert(Cell::new_xy(x, y));
        }
    }
    debug_assert_eq!(lattice.len(), hexagonal_len(radius));

    debug!("Generated hexagon of radius {} ({} cells)", radius, lattice.len());
    lattice
}

/// Generate a rectangle-shaped region, `width` cells wide and `height` rows
/// tall. The rectangle is laid out in offset coordinates, then converted to
/// cube coordinates: each row `y` is shifted left by `y / 2` so that rows
/// stagger back and forth instead of drifting diagonally ("odd-row" offset).
pub fn rectangular(width: u16, height: u16) -> Lattice {
    let mut lattice =
        Lattice::with_capacity(usize::from(width) * usize::from(height));
    let width = i32::from(width);
    for y in 0..i32::from(height) {
        let y_offset = y >> 1;
        for x in -y_offset..(width - y_offset) {
            lattice.insert(Cell::new_xy(x, y));
        }
    }

    debug!(
        "Generated {}x{} rectangle ({} cells)",
        width,
        height,
        lattice.len()
    );
    lattice
}

/// Generate a rhombus-shaped region centered on the origin, spanning
/// `[-width/2, width/2]` along one axis and `[-height/2, height/2]` along
/// another (both halves rounded down). The direction picks which pair of axes
/// the rhombus is aligned to.
pub fn parallelogram(
    width: u16,
    height: u16,
    direction: ShapeDirection,
) -> Lattice {
    let w = i32::from(width / 2);
    let h = i32::from(height / 2);
    let mut lattice = Lattice::new();
    for x in -w..=w {
        for y in -h..=h {
            let cell = match direction {
                // (x, y, -x-y)
                ShapeDirection::Standard => Cell::new_xy(x, y),
                // (-x-y, x, y)
                ShapeDirection::Flipped => Cell::new_yz(x, y),
                // (x, -x-y, y)
                ShapeDirection::Vertical => Cell::new_xz(x, y),
            };
            lattice.insert(cell);
        }
    }

    debug!(
        "Generated {}x{} {:?} parallelogram ({} cells)",
        width,
        height,
        direction,
        lattice.len()
    );
    lattice
}

/// Generate a triangle-shaped region with one corner at the origin and
/// `base + 1` cells along each edge. The direction picks which way the
/// triangle faces. Triangles only come in [ShapeDirection::Standard] and
/// [ShapeDirection::Flipped]; [ShapeDirection::Vertical] always produces an
/// empty lattice.
pub fn triangular(base: u16, direction: ShapeDirection) -> Lattice {
    let base = i32::from(base);
    let mut lattice = Lattice::new();
    for x in 0..=base {
        for y in 0..=(base - x) {
            match direction {
                // (x, -x-y, y)
                ShapeDirection::Standard => {
                    lattice.insert(Cell::new_xz(x, y));
                }
                // (x, y, -x-y)
                ShapeDirection::Flipped => {
                    lattice.insert(Cell::new_xy(x, y));
                }
                ShapeDirection::Vertical => {}
            }
        }
    }

    debug!(
        "Generated {:?} triangle with base {} ({} cells)",
        direction,
        base,
        lattice.len()
    );
    lattice
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn lattice(cells: &[(i32, i32, i32)]) -> Lattice {
        cells
            .iter()
            .map(|&(x, y, z)| Cell::new(x, y, z).unwrap())
            .collect()
    }

    #[test]
    fn test_hexagonal_len() {
        assert_eq!(hexagonal_len(0), 1);
        assert_eq!(hexagonal_len(1), 7);
        assert_eq!(hexagonal_len(2), 19);
        assert_eq!(hexagonal_len(3), 37);
    }

    #[test]
    fn test_hexagonal() {
        assert_eq!(hexagonal(0), lattice(&[(0, 0, 0)]));

        let mut expected: Lattice = Cell::ORIGIN.neighbors().collect();
        expected.insert(Cell::ORIGIN);
        assert_eq!(hexagonal(1), expected);

        for radius in 0..10 {
            let hexagon = hexagonal(radius);
            assert_eq!(hexagon.len(), hexagonal_len(radius));
            for cell in hexagon.iter() {
                assert!(cell.distance(Cell::ORIGIN) <= usize::from(radius));
            }
        }
    }

    #[test]
    fn test_rectangular() {
        assert_eq!(
            rectangular(3, 2),
            lattice(&[
                (0, 0, 0),
                (1, 0, -1),
                (2, 0, -2),
                (0, 1, -1),
                (1, 1, -2),
                (2, 1, -3),
            ])
        );
        // Third row gets shifted left by 1
        let rect = rectangular(2, 3);
        assert_eq!(rect.len(), 6);
        assert!(rect.contains(Cell::new_xy(-1, 2)));
        assert!(rect.contains(Cell::new_xy(0, 2)));
        assert!(!rect.contains(Cell::new_xy(1, 2)));

        assert!(rectangular(0, 5).is_empty());
        assert!(rectangular(5, 0).is_empty());
    }

    #[test]
    fn test_parallelogram() {
        assert_eq!(
            parallelogram(2, 0, ShapeDirection::Standard),
            lattice(&[(-1, 0, 1), (0, 0, 0), (1, 0, -1)])
        );
        assert_eq!(
            parallelogram(2, 0, ShapeDirection::Flipped),
            lattice(&[(1, -1, 0), (0, 0, 0), (-1, 1, 0)])
        );
        assert_eq!(
            parallelogram(2, 0, ShapeDirection::Vertical),
            lattice(&[(-1, 1, 0), (0, 0, 0), (1, -1, 0)])
        );
        // Odd sizes get rounded down
        assert_eq!(
            parallelogram(5, 3, ShapeDirection::Standard).len(),
            5 * 3
        );
    }

    #[test]
    fn test_triangular() {
        assert_eq!(
            triangular(1, ShapeDirection::Standard),
            lattice(&[(0, 0, 0), (0, -1, 1), (1, -1, 0)])
        );
        assert_eq!(
            triangular(1, ShapeDirection::Flipped),
            lattice(&[(0, 0, 0), (0, 1, -1), (1, 0, -1)])
        );
        assert_eq!(triangular(0, ShapeDirection::Standard).len(), 1);
        // No vertical permutation for triangles
        assert!(triangular(2, ShapeDirection::Vertical).is_empty());
        assert!(triangular(0, ShapeDirection::Vertical).is_empty());
        assert_eq!(
            Shape::Triangular {
                base: 2,
                direction: ShapeDirection::Vertical
            }
            .len(),
            0
        );
    }

    #[test]
    fn test_shape_len() {
        for direction in ShapeDirection::iter() {
            let shapes = [
                Shape::Hexagonal { radius: 4 },
                Shape::Rectangular {
                    width: 7,
                    height: 3,
                },
                Shape::Parallelogram {
                    width: 6,
                    height: 3,
                    direction,
                },
                Shape::Triangular { base: 5, direction },
            ];
            for shape in shapes {
                assert_eq!(shape.generate().len(), shape.len(), "{:?}", shape);
            }
        }
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(
            "flipped".parse::<ShapeDirection>(),
            Ok(ShapeDirection::Flipped)
        );
        assert!("sideways".parse::<ShapeDirection>().is_err());
    }
}
