//! Computer opponents.
//!
//! A `MoveStrategy` looks at a grid snapshot and suggests a destination for
//! the acting player. It never touches the board: the caller feeds the
//! suggestion back through `Board::attempt_move`, which re-validates it.
//!
//! - `RandomStrategy`: uniform over legal destinations, seedable
//! - `GreedyStrategy`: best immediate score margin, deterministic

pub mod greedy;
pub mod random;

pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;

use crate::core::{Coord, Grid, Player};
use crate::rules::Rules;

/// Capability to pick a move.
///
/// ## Contract
///
/// - Returns `None` only when `rules` report no legal move on `grid`.
/// - A returned `Coord` is a legal destination under `rules`, so
///   `Board::attempt_move` accepts it when `player` is to move.
pub trait MoveStrategy {
    /// Suggest a destination for `player`.
    fn select(&mut self, rules: &Rules, grid: &Grid, player: Player) -> Option<Coord>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn select(&mut self, rules: &Rules, grid: &Grid, player: Player) -> Option<Coord> {
        (**self).select(rules, grid, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
