use tracing::trace;

use crate::core::{Coord, Grid, Player};
use crate::rules::Rules;

use super::MoveStrategy;

/// Plays the move with the best immediate score margin.
///
/// Margin is the mover's score minus the opponent's after the move, under
/// the configured scoring. Ties go to the earliest destination in row-major
/// order, so the choice is fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MoveStrategy for GreedyStrategy {
    fn select(&mut self, rules: &Rules, grid: &Grid, player: Player) -> Option<Coord> {
        let mut best: Option<(i64, Coord)> = None;

        for mv in rules.legal_moves(grid) {
            let mut after = *grid;
            rules.apply(&mut after, player, &mv);
            let scores = rules.scores(&after);
            let margin = i64::from(scores[player]) - i64::from(scores[player.opponent()]);

            if best.map_or(true, |(best_margin, _)| margin > best_margin) {
                best = Some((margin, mv.target));
            }
        }

        trace!(%player, ?best, "greedy strategy");
        best.map(|(_, target)| target)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Height, RulesConfig};

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn stack(owner: Player, h: u8) -> CellState {
        CellState::stack(owner, Height::new(h).unwrap())
    }

    #[test]
    fn test_empty_board_takes_first_cell() {
        let mut strategy = GreedyStrategy::new();
        let target = strategy.select(&Rules::default(), &Grid::new(), Player::A);
        assert_eq!(target, Some(at(0, 0)));
    }

    #[test]
    fn test_prefers_capturing_opponent() {
        let grid = Grid::new()
            .with(at(2, 2), stack(Player::B, 5))
            .with(at(0, 0), stack(Player::A, 1));
        let mut strategy = GreedyStrategy::new();

        let target = strategy.select(&Rules::default(), &grid, Player::A).unwrap();
        let mv = Rules::default().resolve(&grid, target).unwrap();
        assert!(mv.captured().contains(&at(2, 2)));
    }

    #[test]
    fn test_respects_scoring() {
        // Capturing two own 1s trades two stacks for one: bad for stack count.
        let grid = Grid::new()
            .with(at(0, 0), stack(Player::A, 1))
            .with(at(0, 2), stack(Player::A, 1));
        let rules = Rules::new(RulesConfig::classic());
        let mut strategy = GreedyStrategy::new();

        let target = strategy.select(&rules, &grid, Player::A).unwrap();
        assert!(!rules.resolve(&grid, target).unwrap().is_capture());
    }

    #[test]
    fn test_no_legal_move() {
        let mut grid = Grid::new();
        for coord in Coord::all() {
            grid.set(coord, stack(Player::B, 2));
        }
        let mut strategy = GreedyStrategy::new();
        assert_eq!(strategy.select(&Rules::default(), &grid, Player::A), None);
    }
}
