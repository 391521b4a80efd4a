//! Resolved moves and move history records.
//!
//! A move is identified by its destination alone; the rules decide whether
//! it lands as a plain placement or as a capture. `Move` is the resolved
//! form, carrying the captured cells so it can be applied or inspected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Height;
use super::coord::Coord;
use super::player::Player;

/// What a move does at its destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// New stack of height 1.
    Placement,
    /// Clear `captured` and place a stack of height `value`.
    Capture {
        /// Captured neighbour cells, in neighbour order.
        /// SmallVec: at most 8 neighbours, never heap-allocates.
        captured: SmallVec<[Coord; 8]>,
        /// Sum of the captured heights.
        value: Height,
    },
}

/// A fully resolved move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Destination cell.
    pub target: Coord,
    /// Placement or capture.
    pub kind: MoveKind,
}

impl Move {
    /// A plain placement at `target`.
    #[must_use]
    pub fn placement(target: Coord) -> Self {
        Self {
            target,
            kind: MoveKind::Placement,
        }
    }

    /// A capture at `target`.
    #[must_use]
    pub fn capture(target: Coord, captured: &[Coord], value: Height) -> Self {
        Self {
            target,
            kind: MoveKind::Capture {
                captured: SmallVec::from_slice(captured),
                value,
            },
        }
    }

    /// Height of the stack this move creates.
    #[must_use]
    pub fn resulting_height(&self) -> Height {
        match &self.kind {
            MoveKind::Placement => Height::MIN,
            MoveKind::Capture { value, .. } => *value,
        }
    }

    /// Cells this move clears (empty for placements).
    #[must_use]
    pub fn captured(&self) -> &[Coord] {
        match &self.kind {
            MoveKind::Placement => &[],
            MoveKind::Capture { captured, .. } => captured.as_slice(),
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture { .. })
    }
}

/// A move that has been applied to a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The resolved move.
    pub mv: Move,

    /// Turn index the move was played at (0 for the opening move).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement() {
        let target = Coord::new(2, 3).unwrap();
        let mv = Move::placement(target);

        assert_eq!(mv.target, target);
        assert!(!mv.is_capture());
        assert!(mv.captured().is_empty());
        assert_eq!(mv.resulting_height(), Height::MIN);
    }

    #[test]
    fn test_capture() {
        let target = Coord::new(1, 1).unwrap();
        let captured = [Coord::new(0, 0).unwrap(), Coord::new(1, 2).unwrap()];
        let mv = Move::capture(target, &captured, Height::new(5).unwrap());

        assert!(mv.is_capture());
        assert_eq!(mv.captured(), &captured);
        assert_eq!(mv.resulting_height().get(), 5);
    }

    #[test]
    fn test_move_record() {
        let mv = Move::placement(Coord::new(0, 0).unwrap());
        let record = MoveRecord::new(Player::B, mv.clone(), 3);

        assert_eq!(record.player, Player::B);
        assert_eq!(record.mv, mv);
        assert_eq!(record.turn, 3);
    }
}
