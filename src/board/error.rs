use crate::core::Coord;

/// Why a move attempt was rejected. No variant is fatal; the board is left
/// untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { row: 7, col: 0 };
        assert_eq!(err.to_string(), "coordinate (7, 0) is off the board");

        let err = MoveError::Occupied(Coord::new(1, 2).unwrap());
        assert_eq!(err.to_string(), "cell (1, 2) is already occupied");

        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }
}
