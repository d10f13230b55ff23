use crate::{hex::Cell, HexError};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the 6 sides of a hexagon. For any given cell, a side represents two
/// useful things:
///
/// - Direction from center point to the midpoint of a single side of that cell
/// - Direction to a neighboring cell's center point
///
/// Sides are numbered `0` through `5`, and the numbering is the same for
/// every cell, so "side N" of a cell always faces "side N+3" of its neighbor.
/// The numbering doesn't depend on [crate::Orientation]; only the visual
/// angle of each side does.
///
/// This is a thin wrapper around the side index, which can only be
/// constructed with a valid index. Use [Side::new] or `TryFrom<u8>` to get one
/// from a raw number.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "side {}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct Side(u8);

impl Side {
    /// Number of sides on a hexagon. Hopefully this never changes.
    pub const COUNT: usize = 6;

    /// All sides, in index order
    pub const ALL: [Self; Self::COUNT] =
        [Self(0), Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// The cube vector that moves a cell across each side, indexed by side.
    /// Each entry steps `+1` along one axis and `-1` along another, and
    /// consecutive entries are 60° apart going around the hexagon.
    pub const OFFSETS: [Cell; Self::COUNT] = [
        Cell::new_xy(1, -1),
        Cell::new_xy(1, 0),
        Cell::new_xy(0, 1),
        Cell::new_xy(-1, 1),
        Cell::new_xy(-1, 0),
        Cell::new_xy(0, -1),
    ];

    /// Get a side by its index. Returns an error if the index is not in
    /// `0..=5`.
    pub fn new(index: u8) -> Result<Self, HexError> {
        if usize::from(index) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(HexError::SideOutOfRange(index))
        }
    }

    /// The index of this side, in `0..=5`
    pub fn index(self) -> u8 {
        self.0
    }

    /// Get the cube vector that moves a cell one step across this side
    pub fn offset(self) -> Cell {
        Self::OFFSETS[usize::from(self.0)]
    }

    /// Get the side directly across the hexagon from this one
    pub fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// Get the next side in index order, wrapping around from 5 to 0
    pub fn next(self) -> Self {
        self.rotate(1)
    }

    /// Get the previous side in index order, wrapping around from 0 to 5
    pub fn previous(self) -> Self {
        // Adding 5 is the same as subtracting 1 post-modulus, and it saves us
        // from worrying about underflow
        self.rotate(5)
    }

    fn rotate(self, steps: u8) -> Self {
        Self((self.0 + steps) % Self::COUNT as u8)
    }
}

impl TryFrom<u8> for Side {
    type Error = HexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.0
    }
}
