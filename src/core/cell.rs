//! Cell contents: stack heights and the closed `CellState` union.
//!
//! A cell is either empty or holds one stack owned by a player. The stack's
//! height is the pip value showing on top, always in `1..=6`. Keeping the
//! height inside the `Stack` variant means an empty cell can never carry a
//! height and an occupied cell can never be height 0.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Stack height, restricted to `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Height(u8);

impl Height {
    /// Smallest legal height (a fresh placement).
    pub const MIN: Height = Height(1);

    /// Largest legal height.
    pub const MAX: Height = Height(6);

    /// Create a height, or `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pip value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Height {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Height::new(value).ok_or_else(|| format!("stack height {} outside 1..=6", value))
    }
}

impl From<Height> for u8 {
    fn from(height: Height) -> Self {
        height.0
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of one grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No stack.
    #[default]
    Empty,
    /// A stack owned by `owner`.
    Stack { owner: Player, height: Height },
}

impl CellState {
    /// Create an occupied cell.
    #[must_use]
    pub const fn stack(owner: Player, height: Height) -> Self {
        CellState::Stack { owner, height }
    }

    /// Owner of the stack, `None` when empty.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Stack { owner, .. } => Some(owner),
        }
    }

    /// Stack height, `0` when empty.
    #[must_use]
    pub const fn height(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Stack { height, .. } => height.get(),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Check if the cell holds a stack owned by `player`.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_range() {
        assert!(Height::new(0).is_none());
        assert!(Height::new(7).is_none());
        for v in 1..=6 {
            assert_eq!(Height::new(v).map(Height::get), Some(v));
        }
        assert!(Height::MIN < Height::MAX);
    }

    #[test]
    fn test_empty_cell() {
        let cell = CellState::default();
        assert!(cell.is_empty());
        assert_eq!(cell.owner(), None);
        assert_eq!(cell.height(), 0);
        assert!(!cell.is_owned_by(Player::A));
    }

    #[test]
    fn test_stack_cell() {
        let cell = CellState::stack(Player::B, Height::new(4).unwrap());
        assert!(!cell.is_empty());
        assert_eq!(cell.owner(), Some(Player::B));
        assert_eq!(cell.height(), 4);
        assert!(cell.is_owned_by(Player::B));
        assert!(!cell.is_owned_by(Player::A));
    }

    #[test]
    fn test_height_serde_rejects_out_of_range() {
        let ok: Height = serde_json::from_str("5").unwrap();
        assert_eq!(ok.get(), 5);
        assert!(serde_json::from_str::<Height>("0").is_err());
        assert!(serde_json::from_str::<Height>("9").is_err());
    }
}
