use crate::{
    hex::{Cell, Side},
    HexError,
};
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::{
    collections::{hash_set, HashSet},
    ops,
};

/// A set of cells
pub type CellSet = HashSet<Cell, FnvBuildHasher>;

/// A region of the hex grid, i.e. a set of unique cells. There's no ordering
/// among the members, and no requirement that the region is contiguous or has
/// any particular shape. See [crate::layout] for generating common shapes.
///
/// Lattices support set arithmetic through operators:
///
/// - `a += b` inserts every cell of `b` into `a` (union)
/// - `a -= b` removes every cell of `b` from `a` (difference)
///
/// Cells that are already present (for `+=`) or absent (for `-=`) are
/// ignored.
///
/// Lattices are plain owned containers. Mutation only ever touches the
/// receiver, so share one across threads only behind your own lock.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lattice {
    cells: CellSet,
}

impl Lattice {
    /// Create a new empty lattice
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty lattice with room for at least `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: CellSet::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
        }
    }

    /// Get the 6 cells adjacent to the given one. This does **not** check
    /// membership in any lattice, so the returned cells may be outside
    /// whatever region you're working in. Intersect with a lattice (or use
    /// [Self::neighbors_within]) if you only want in-bounds neighbors.
    pub fn neighbors(cell: Cell) -> CellSet {
        cell.neighbors().collect()
    }

    /// Get the cell adjacent to the given one across a particular side.
    /// Returns an error if `side` isn't a valid side index (`0..=5`).
    pub fn neighbor(cell: Cell, side: u8) -> Result<Cell, HexError> {
        Ok(cell.neighbor(Side::new(side)?))
    }

    /// Get the neighbors of the given cell that are members of this lattice.
    /// The cell itself doesn't need to be a member.
    pub fn neighbors_within(&self, cell: Cell) -> CellSet {
        cell.neighbors()
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    /// The set of cells that are directly adjacent to at least one cell in
    /// this lattice, but NOT in the lattice themselves. In other words, the
    /// ring of cells hugging the outside (and any inside holes) of the region.
    pub fn border(&self) -> CellSet {
        self.cells
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|neighbor| !self.contains(*neighbor))
            .collect()
    }

    /// Add a cell to the lattice. Returns `true` if it wasn't already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Remove a cell from the lattice. Returns `true` if it was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Get the number of cells in the lattice
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cells, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// A reference to the underlying set of cells
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Move the set of cells out of this struct
    pub fn into_cells(self) -> CellSet {
        self.cells
    }

    /// Build a new lattice holding every cell in either lattice
    pub fn union(&self, other: &Lattice) -> Lattice {
        let mut result = self.clone();
        result += other;
        result
    }

    /// Build a new lattice holding every cell in this lattice that isn't in
    /// the other one
    pub fn difference(&self, other: &Lattice) -> Lattice {
        let mut result = self.clone();
        result -= other;
        result
    }

    /// Build a new lattice holding every cell that's in both lattices
    pub fn intersection(&self, other: &Lattice) -> Lattice {
        self.cells.intersection(&other.cells).copied().collect()
    }
}

impl ops::AddAssign<&Lattice> for Lattice {
    fn add_assign(&mut self, rhs: &Lattice) {
        self.cells.extend(rhs.iter());
    }
}

impl ops::AddAssign for Lattice {
    fn add_assign(&mut self, rhs: Lattice) {
        self.cells.extend(rhs.cells);
    }
}

impl ops::SubAssign<&Lattice> for Lattice {
    fn sub_assign(&mut self, rhs: &Lattice) {
        for cell in rhs.iter() {
            self.cells.remove(&cell);
        }
    }
}

impl ops::SubAssign for Lattice {
    fn sub_assign(&mut self, rhs: Lattice) {
        *self -= &rhs;
    }
}

impl From<CellSet> for Lattice {
    fn from(cells: CellSet) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Lattice {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for Lattice {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for Lattice {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_ser_tokens, Token};

    fn lattice(cells: &[(i32, i32)]) -> Lattice {
        cells.iter().map(|&(x, y)| Cell::new_xy(x, y)).collect()
    }

    #[test]
    fn test_union() {
        let mut a = lattice(&[(0, 0), (1, 0)]);
        let b = lattice(&[(1, 0), (2, 0)]);
        a += &b;
        assert_eq!(a, lattice(&[(0, 0), (1, 0), (2, 0)]));
        // Already present, no-op
        a += b;
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_difference() {
        let mut a = lattice(&[(0, 0), (1, 0), (2, 0)]);
        // (5, 5) isn't in a, should be silently ignored
        a -= &lattice(&[(1, 0), (5, 5)]);
        assert_eq!(a, lattice(&[(0, 0), (2, 0)]));
        a -= lattice(&[(0, 0), (2, 0)]);
        assert!(a.is_empty());
    }

    #[test]
    fn test_non_mutating_set_ops() {
        let a = lattice(&[(0, 0), (1, 0), (2, 0)]);
        let b = lattice(&[(2, 0), (3, 0)]);
        assert_eq!(a.union(&b).len(), 4);
        assert_eq!(a.difference(&b), lattice(&[(0, 0), (1, 0)]));
        assert_eq!(a.intersection(&b), lattice(&[(2, 0)]));
        // Inputs are untouched
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_insert_remove() {
        let mut a = Lattice::with_capacity(4);
        assert!(a.insert(Cell::ORIGIN));
        assert!(!a.insert(Cell::ORIGIN));
        assert!(a.contains(Cell::ORIGIN));
        assert!(a.remove(Cell::ORIGIN));
        assert!(!a.remove(Cell::ORIGIN));
        assert!(a.is_empty());
    }

    #[test]
    fn test_neighbors() {
        let cell = Cell::new_xy(3, -1);
        let neighbors = Lattice::neighbors(cell);
        assert_eq!(neighbors.len(), 6);
        assert!(!neighbors.contains(&cell));
        for neighbor in &neighbors {
            assert_eq!(cell.distance(*neighbor), 1);
        }
    }

    #[test]
    fn test_neighbor() {
        let neighbors = Lattice::neighbors(Cell::ORIGIN);
        for side in 0..6 {
            let neighbor = Lattice::neighbor(Cell::ORIGIN, side).unwrap();
            assert!(neighbors.contains(&neighbor));
            assert_eq!(neighbor, Side::OFFSETS[usize::from(side)]);
        }
        assert_eq!(
            Lattice::neighbor(Cell::ORIGIN, 6),
            Err(HexError::SideOutOfRange(6))
        );
    }

    #[test]
    fn test_neighbors_within() {
        let a = lattice(&[(0, 0), (1, -1), (1, 0), (5, 5)]);
        assert_eq!(
            a.neighbors_within(Cell::ORIGIN),
            lattice(&[(1, -1), (1, 0)]).into_cells()
        );
    }

    #[test]
    fn test_border() {
        let single = lattice(&[(0, 0)]);
        assert_eq!(single.border(), Lattice::neighbors(Cell::ORIGIN));

        // Two adjacent cells share two neighbors, so the border is 8 cells
        let pair = lattice(&[(0, 0), (1, 0)]);
        let border = pair.border();
        assert_eq!(border.len(), 8);
        assert!(!border.contains(&Cell::ORIGIN));
    }

    #[test]
    fn test_serde() {
        // A lattice should look exactly like a flat list of cells
        assert_ser_tokens(
            &lattice(&[(1, -1)]),
            &[
                Token::Seq { len: Some(1) },
                Token::Struct {
                    name: "Cell",
                    len: 2,
                },
                Token::Str("x"),
                Token::I32(1),
                Token::Str("y"),
                Token::I32(-1),
                Token::StructEnd,
                Token::SeqEnd,
            ],
        );
    }
}
