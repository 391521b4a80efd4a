//! # cephalopod
//!
//! Rule engine and computer opponents for Cephalopod, a two-player dice
//! capture game on a 5×5 grid.
//!
//! ## Rules in brief
//!
//! Players alternate placing a stack on an empty cell. If some of the
//! occupied neighbours of that cell add up to 2..=6 pips, they are captured:
//! cleared from the board, with the new stack showing their sum. Otherwise
//! the new stack shows 1. The game ends when the player to move has nowhere
//! to play or the move limit is reached, and the higher score wins.
//!
//! ## Design Principles
//!
//! 1. **One entry point**: the grid only changes through
//!    `Board::attempt_move`. Rejections are plain `false`/`Err` values with
//!    no side effects.
//!
//! 2. **Shared rules**: the board and every strategy consult the same
//!    `Rules`, so a strategy can only suggest what the board accepts.
//!
//! 3. **Injected randomness**: strategies own their RNG. No global state.
//!
//! ## Modules
//!
//! - `core`: players, cells, coordinates, grids, moves, RNG, configuration
//! - `rules`: capture detection, move resolution, terminal detection, scoring
//! - `board`: the board state machine
//! - `strategy`: computer opponents
//! - `session`: human-versus-computer session with a cancellable reply

pub mod core;
pub mod rules;
pub mod board;
pub mod strategy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CaptureChoice, CellState, Coord, GameRng, GameRngState, Grid, Height, Move, MoveKind,
    MoveRecord, Neighborhood, Player, PlayerMap, RulesConfig, Scoring, SessionConfig,
    BOARD_SIZE, CELL_COUNT, DEFAULT_MAX_TURNS,
};

pub use crate::rules::{CaptureOption, GameResult, Rules};

pub use crate::board::{Board, MoveError};

pub use crate::strategy::{GreedyStrategy, MoveStrategy, RandomStrategy};

pub use crate::session::{Session, SessionError};
