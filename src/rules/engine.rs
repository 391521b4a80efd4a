//! The rule engine.
//!
//! `Rules` answers every question about a position: which destinations are
//! legal, how a move resolves, what it does to the grid, when the game is
//! over and who won. It holds no game state itself; `Board` and the
//! strategies both call into the same `Rules` so they can never disagree.

use serde::{Deserialize, Serialize};

use crate::core::{CellState, Coord, Grid, Move, Player, PlayerMap, RulesConfig, Scoring};

use super::capture::canonical_capture;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rule engine for one configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Resolve a move at `target`.
    ///
    /// Returns `None` for an occupied destination. An empty destination
    /// always resolves: to the canonical capture when one exists, otherwise
    /// to a plain placement.
    #[must_use]
    pub fn resolve(&self, grid: &Grid, target: Coord) -> Option<Move> {
        if !grid.get(target).is_empty() {
            return None;
        }

        Some(match canonical_capture(grid, target, &self.config) {
            Some(capture) => Move::capture(target, &capture.cells, capture.value),
            None => Move::placement(target),
        })
    }

    /// All legal moves, one per legal destination, in row-major order.
    ///
    /// Legality doesn't depend on who moves; only ownership of the result
    /// does.
    #[must_use]
    pub fn legal_moves(&self, grid: &Grid) -> Vec<Move> {
        grid.empty_cells()
            .filter_map(|target| self.resolve(grid, target))
            .collect()
    }

    /// Destinations of all legal moves, in row-major order.
    #[must_use]
    pub fn legal_targets(&self, grid: &Grid) -> Vec<Coord> {
        self.legal_moves(grid).into_iter().map(|mv| mv.target).collect()
    }

    #[must_use]
    pub fn has_legal_move(&self, grid: &Grid) -> bool {
        grid.empty_cells().any(|target| self.resolve(grid, target).is_some())
    }

    /// Apply a resolved move for `player`.
    ///
    /// Captured cells are cleared before the new stack is placed.
    pub fn apply(&self, grid: &mut Grid, player: Player, mv: &Move) {
        for &cell in mv.captured() {
            grid.set(cell, CellState::Empty);
        }
        grid.set(mv.target, CellState::stack(player, mv.resulting_height()));
    }

    /// Score of each player under the configured formula.
    #[must_use]
    pub fn scores(&self, grid: &Grid) -> PlayerMap<u32> {
        PlayerMap::new(|player| match self.config.scoring {
            Scoring::TotalHeight => grid.height_owned_by(player),
            Scoring::StackCount => grid.stacks_owned_by(player),
        })
    }

    /// Result of the position if the game ended now.
    #[must_use]
    pub fn result(&self, grid: &Grid) -> GameResult {
        let scores = self.scores(grid);
        match scores[Player::A].cmp(&scores[Player::B]) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
            std::cmp::Ordering::Less => GameResult::Winner(Player::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check whether the game ends after `mover` played, leaving `grid` with
    /// `turn` moves made.
    #[must_use]
    pub fn is_terminal_after(&self, grid: &Grid, mover: Player, turn: u32) -> bool {
        if let Some(target) = self.config.target_score {
            if self.scores(grid)[mover] >= target {
                return true;
            }
        }
        if self.config.max_turns.is_some_and(|limit| turn >= limit) {
            return true;
        }
        !self.has_legal_move(grid)
    }
}
