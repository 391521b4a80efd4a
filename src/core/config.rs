//! Rule and session configuration.
//!
//! - `RulesConfig`: which cells count as neighbours, how captures are
//!   chosen, how the game is scored and when it ends
//! - `SessionConfig`: who the computer plays and how long it waits
//!
//! The defaults are the engine's standard ruleset. `RulesConfig::classic()`
//! gives the published Cephalopod rules.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::Player;

/// Move limit of the default ruleset.
pub const DEFAULT_MAX_TURNS: u32 = 200;

/// Which surrounding cells take part in a capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighborhood {
    /// All 8 surrounding cells, diagonals included.
    #[default]
    Moore,
    /// Only the 4 edge-sharing cells.
    Orthogonal,
}

/// How to pick one capture when several neighbour subsets qualify.
///
/// Remaining ties go to the earliest subset in neighbour order, so the
/// choice is always deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureChoice {
    /// Highest pip sum first, then most stacks.
    #[default]
    LargestSum,
    /// Most stacks first, then highest pip sum.
    MostStacks,
}

/// How a finished position is scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scoring {
    /// Sum of the heights of owned stacks.
    #[default]
    TotalHeight,
    /// Number of owned stacks.
    StackCount,
}

/// Rule engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cells considered adjacent for captures.
    pub neighborhood: Neighborhood,

    /// Tie-break between competing capture subsets.
    pub capture_choice: CaptureChoice,

    /// Smallest pip sum that counts as a capture (default: 2).
    /// A lone height-1 neighbour sums to 1 and is a plain placement.
    pub min_capture_value: u8,

    /// Fewest stacks a capture must take (default: 1).
    pub min_captured_stacks: usize,

    /// Scoring formula for the final result.
    pub scoring: Scoring,

    /// End the game as soon as the mover's score reaches this value.
    pub target_score: Option<u32>,

    /// End the game once this many moves have been played
    /// (default: [`DEFAULT_MAX_TURNS`]). Single-stack captures keep
    /// emptying cells, so without a limit the board rarely fills and the
    /// game runs forever. `None` removes the limit.
    pub max_turns: Option<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            neighborhood: Neighborhood::Moore,
            capture_choice: CaptureChoice::LargestSum,
            min_capture_value: 2,
            min_captured_stacks: 1,
            scoring: Scoring::TotalHeight,
            target_score: None,
            max_turns: Some(DEFAULT_MAX_TURNS),
        }
    }
}

impl RulesConfig {
    /// The published Cephalopod ruleset: orthogonal captures of at least
    /// two stacks, winner by number of stacks, played until the board is
    /// full. Every capture removes a stack, so no move limit is needed.
    #[must_use]
    pub fn classic() -> Self {
        Self::default()
            .with_neighborhood(Neighborhood::Orthogonal)
            .with_min_captured_stacks(2)
            .with_scoring(Scoring::StackCount)
            .without_max_turns()
    }

    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    #[must_use]
    pub fn with_capture_choice(mut self, choice: CaptureChoice) -> Self {
        self.capture_choice = choice;
        self
    }

    /// Set the smallest capturing sum. Clamped to `1..=6`.
    #[must_use]
    pub fn with_min_capture_value(mut self, value: u8) -> Self {
        self.min_capture_value = value.clamp(1, 6);
        self
    }

    /// Set the fewest stacks a capture must take. Clamped to at least 1.
    #[must_use]
    pub fn with_min_captured_stacks(mut self, count: usize) -> Self {
        self.min_captured_stacks = count.max(1);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Play until nobody can move, however long that takes.
    #[must_use]
    pub fn without_max_turns(mut self) -> Self {
        self.max_turns = None;
        self
    }
}

/// Configuration for a human-versus-computer session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The side the computer plays (default: `Player::B`, moving second).
    pub computer: Player,

    /// Delay between a human move and the computer's reply (default: 500ms).
    pub reply_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer: Player::B,
            reply_delay: Duration::from_millis(500),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_computer(mut self, player: Player) -> Self {
        self.computer = player;
        self
    }

    #[must_use]
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}
