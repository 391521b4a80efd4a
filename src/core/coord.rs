//! Grid coordinates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::Neighborhood;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row/column offsets of the 8 surrounding cells, in row-major order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row/column offsets of the 4 edge-sharing cells, in row-major order.
const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// An in-range board coordinate.
///
/// Only constructible through [`Coord::new`] or [`Coord::from_index`], so a
/// `Coord` always addresses a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` when out of range.
    ///
    /// ```
    /// use cephalopod::core::Coord;
    ///
    /// assert!(Coord::new(4, 4).is_some());
    /// assert!(Coord::new(5, 0).is_none());
    /// ```
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index in `0..CELL_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Iterate over every board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }

    /// In-range neighbours of this cell, in row-major order.
    #[must_use]
    pub fn neighbors(self, neighborhood: Neighborhood) -> SmallVec<[Coord; 8]> {
        let offsets: &[(isize, isize)] = match neighborhood {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::Orthogonal => &ORTHOGONAL_OFFSETS,
        };

        offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = self.row().checked_add_signed(dr)?;
                let col = self.col().checked_add_signed(dc)?;
                Coord::new(row, col)
            })
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_check() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(4, 4).is_some());
        assert!(Coord::new(5, 4).is_none());
        assert!(Coord::new(4, 5).is_none());
        assert!(Coord::new(usize::MAX, 0).is_none());
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, coord) in Coord::all().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(coord));
        }
        assert_eq!(Coord::all().count(), CELL_COUNT);
        assert!(Coord::from_index(CELL_COUNT).is_none());
    }

    #[test]
    fn test_corner_neighbors() {
        let corner = Coord::new(0, 0).unwrap();
        let moore = corner.neighbors(Neighborhood::Moore);
        assert_eq!(
            moore.as_slice(),
            &[
                Coord::new(0, 1).unwrap(),
                Coord::new(1, 0).unwrap(),
                Coord::new(1, 1).unwrap(),
            ]
        );

        let ortho = corner.neighbors(Neighborhood::Orthogonal);
        assert_eq!(ortho.len(), 2);
        assert!(!ortho.contains(&Coord::new(1, 1).unwrap()));
    }

    #[test]
    fn test_center_neighbors() {
        let center = Coord::new(2, 2).unwrap();
        assert_eq!(center.neighbors(Neighborhood::Moore).len(), 8);
        assert_eq!(center.neighbors(Neighborhood::Orthogonal).len(), 4);
        assert!(!center.neighbors(Neighborhood::Moore).contains(&center));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(3, 1).unwrap()), "(3, 1)");
    }
}
