//! Rule engine: capture detection, move resolution, terminal detection
//! and scoring.
//!
//! `Board` and every `MoveStrategy` go through the same `Rules`, so a
//! strategy can only suggest destinations the board will accept.

pub mod capture;
pub mod engine;

pub use capture::{canonical_capture, capture_options, CaptureOption};
pub use engine::{GameResult, Rules};
