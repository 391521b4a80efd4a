//! The board: grid, turn counter, finished flag and move history behind a
//! single validating entry point.
//!
//! ## Usage
//!
//! ```
//! use cephalopod::board::Board;
//! use cephalopod::core::Player;
//!
//! let mut board = Board::new();
//! assert!(board.attempt_move(0, 0));
//! assert!(!board.attempt_move(0, 0)); // occupied
//! assert!(!board.attempt_move(9, 9)); // off the board
//!
//! assert_eq!(board.current_turn(), 1);
//! assert_eq!(board.to_move(), Player::B);
//! ```

pub mod error;
pub mod state;

pub use error::MoveError;
pub use state::Board;
