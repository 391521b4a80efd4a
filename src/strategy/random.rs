use tracing::trace;

use crate::core::{Coord, GameRng, GameRngState, Grid, Player};
use crate::rules::Rules;

use super::MoveStrategy;

/// Picks uniformly among all legal destinations.
///
/// Owns its RNG: inject a seeded one for reproducible games.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create with a seed drawn from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Resume from a saved RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }

    /// Current RNG state, for replaying the rest of a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select(&mut self, rules: &Rules, grid: &Grid, player: Player) -> Option<Coord> {
        let targets = rules.legal_targets(grid);
        let choice = self.rng.choose(&targets).copied();
        trace!(%player, options = targets.len(), ?choice, "random strategy");
        choice
    }

    fn name(&self) -> &str {
        "Random"
    }
}
