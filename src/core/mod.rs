//! Core value types: players, cells, coordinates, grids, moves, RNG,
//! configuration.
//!
//! Nothing in here knows the capture rules; see `rules` for that.

pub mod player;
pub mod cell;
pub mod coord;
pub mod grid;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{Player, PlayerMap};
pub use cell::{CellState, Height};
pub use coord::{Coord, BOARD_SIZE, CELL_COUNT};
pub use grid::Grid;
pub use rng::{GameRng, GameRngState};
pub use config::{CaptureChoice, Neighborhood, RulesConfig, Scoring, SessionConfig, DEFAULT_MAX_TURNS};
pub use action::{Move, MoveKind, MoveRecord};
