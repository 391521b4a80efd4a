//! The 5×5 grid of cells.
//!
//! `Grid` is a plain `Copy` value: the board hands out snapshots by value,
//! and strategies evaluate candidate moves on their own copies.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::CellState;
use super::coord::{Coord, BOARD_SIZE, CELL_COUNT};
use super::player::Player;

/// Row-major grid of cell states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [CellState; CELL_COUNT],
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[coord.index()]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, coord: Coord, cell: CellState) {
        self.cells[coord.index()] = cell;
    }

    /// Builder form of [`Grid::set`], handy for setting up positions.
    #[must_use]
    pub fn with(mut self, coord: Coord, cell: CellState) -> Self {
        self.set(coord, cell);
        self
    }

    /// Iterate over `(Coord, CellState)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[CellState]> {
        if row < BOARD_SIZE {
            Some(&self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE])
        } else {
            None
        }
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter(|(_, cell)| cell.is_empty()).map(|(c, _)| c)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Sum of all stack heights on the board.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.cells.iter().map(|cell| u32::from(cell.height())).sum()
    }

    /// Number of stacks owned by `player`.
    #[must_use]
    pub fn stacks_owned_by(&self, player: Player) -> u32 {
        self.cells.iter().filter(|cell| cell.is_owned_by(player)).count() as u32
    }

    /// Sum of the heights of the stacks owned by `player`.
    #[must_use]
    pub fn height_owned_by(&self, player: Player) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.is_owned_by(player))
            .map(|cell| u32::from(cell.height()))
            .sum()
    }
}

impl Index<Coord> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.index()]
    }
}

impl std::fmt::Display for Grid {
    /// One line per row: `.` for empty, `a3`/`b5` for stacks.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    CellState::Empty => " .".to_string(),
                    CellState::Stack { owner: Player::A, height } => format!("a{}", height),
                    CellState::Stack { owner: Player::B, height } => format!("b{}", height),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Height;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn stack(owner: Player, h: u8) -> CellState {
        CellState::stack(owner, Height::new(h).unwrap())
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.empty_cells().count(), CELL_COUNT);
        assert_eq!(grid.stack_count(), 0);
        assert_eq!(grid.total_pips(), 0);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let grid = Grid::new().with(at(1, 2), stack(Player::A, 3));
        assert_eq!(grid.get(at(1, 2)).height(), 3);
        assert_eq!(grid[at(1, 2)].owner(), Some(Player::A));
        assert!(grid.get(at(2, 1)).is_empty());
        assert_eq!(grid.row(1).map(|r| r[2].height()), Some(3));
        assert!(grid.row(5).is_none());
    }

    #[test]
    fn test_ownership_totals() {
        let grid = Grid::new()
            .with(at(0, 0), stack(Player::A, 2))
            .with(at(0, 1), stack(Player::A, 5))
            .with(at(4, 4), stack(Player::B, 6));

        assert_eq!(grid.stacks_owned_by(Player::A), 2);
        assert_eq!(grid.height_owned_by(Player::A), 7);
        assert_eq!(grid.stacks_owned_by(Player::B), 1);
        assert_eq!(grid.height_owned_by(Player::B), 6);
        assert_eq!(grid.total_pips(), 13);
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new();
        for coord in Coord::all() {
            grid.set(coord, stack(Player::B, 1));
        }
        assert!(grid.is_full());
        assert_eq!(grid.empty_cells().count(), 0);
    }

    #[test]
    fn test_display() {
        let grid = Grid::new()
            .with(at(0, 0), stack(Player::A, 1))
            .with(at(0, 4), stack(Player::B, 6));
        let text = grid.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "a1  .  .  . b6");
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
