//! Capture detection.
//!
//! A placement captures when some subset of the occupied neighbours of the
//! destination has a pip sum in `min_capture_value..=6` and at least
//! `min_captured_stacks` members. Owners don't matter: your own stacks can
//! be captured too.
//!
//! At most 8 neighbours means at most 255 subsets, so every subset is
//! enumerated as a bitmask over the neighbours in row-major order.

use smallvec::SmallVec;

use crate::core::{CaptureChoice, Coord, Grid, Height, RulesConfig};

/// One qualifying neighbour subset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureOption {
    /// Captured cells, in neighbour order.
    pub cells: SmallVec<[Coord; 8]>,
    /// Sum of their heights.
    pub value: Height,
}

/// Occupied neighbours of `target` with their heights.
fn occupied_neighbors(grid: &Grid, target: Coord, config: &RulesConfig) -> SmallVec<[(Coord, u8); 8]> {
    target
        .neighbors(config.neighborhood)
        .into_iter()
        .map(|c| (c, grid.get(c).height()))
        .filter(|&(_, h)| h > 0)
        .collect()
}

/// Pip sum and stack count of the subset selected by `mask`, if it qualifies.
fn evaluate(neighbors: &[(Coord, u8)], mask: u32, config: &RulesConfig) -> Option<(Height, usize)> {
    let count = mask.count_ones() as usize;
    if count < config.min_captured_stacks {
        return None;
    }

    let mut sum = 0u8;
    for (i, &(_, h)) in neighbors.iter().enumerate() {
        if mask & (1 << i) != 0 {
            sum += h;
            if sum > Height::MAX.get() {
                return None;
            }
        }
    }

    if sum < config.min_capture_value {
        return None;
    }
    Height::new(sum).map(|value| (value, count))
}

fn option_for(neighbors: &[(Coord, u8)], mask: u32, value: Height) -> CaptureOption {
    let cells = neighbors
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, &(c, _))| c)
        .collect();
    CaptureOption { cells, value }
}

/// Every qualifying capture at `target`, in ascending bitmask order.
///
/// Returns nothing for occupied destinations.
#[must_use]
pub fn capture_options(grid: &Grid, target: Coord, config: &RulesConfig) -> Vec<CaptureOption> {
    if !grid.get(target).is_empty() {
        return Vec::new();
    }

    let neighbors = occupied_neighbors(grid, target, config);
    (1..(1u32 << neighbors.len()))
        .filter_map(|mask| {
            evaluate(&neighbors, mask, config).map(|(value, _)| option_for(&neighbors, mask, value))
        })
        .collect()
}

/// The single capture the rules apply at `target`, if any.
///
/// Ranked by `config.capture_choice`; equal ranks keep the lowest bitmask.
#[must_use]
pub fn canonical_capture(grid: &Grid, target: Coord, config: &RulesConfig) -> Option<CaptureOption> {
    if !grid.get(target).is_empty() {
        return None;
    }

    let neighbors = occupied_neighbors(grid, target, config);
    let mut best: Option<((u8, u8), u32, Height)> = None;

    for mask in 1..(1u32 << neighbors.len()) {
        let Some((value, count)) = evaluate(&neighbors, mask, config) else {
            continue;
        };
        let rank = match config.capture_choice {
            CaptureChoice::LargestSum => (value.get(), count as u8),
            CaptureChoice::MostStacks => (count as u8, value.get()),
        };
        if best.map_or(true, |(best_rank, _, _)| rank > best_rank) {
            best = Some((rank, mask, value));
        }
    }

    best.map(|(_, mask, value)| option_for(&neighbors, mask, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Neighborhood, Player};

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn stack(owner: Player, h: u8) -> CellState {
        CellState::stack(owner, Height::new(h).unwrap())
    }

    #[test]
    fn test_no_neighbors_no_capture() {
        let grid = Grid::new();
        let config = RulesConfig::default();
        assert!(capture_options(&grid, at(2, 2), &config).is_empty());
        assert!(canonical_capture(&grid, at(2, 2), &config).is_none());
    }

    #[test]
    fn test_single_height_one_is_trivial() {
        let grid = Grid::new().with(at(0, 0), stack(Player::A, 1));
        let config = RulesConfig::default();
        assert!(canonical_capture(&grid, at(0, 1), &config).is_none());

        let permissive = RulesConfig::default().with_min_capture_value(1);
        let capture = canonical_capture(&grid, at(0, 1), &permissive).unwrap();
        assert_eq!(capture.cells.as_slice(), &[at(0, 0)]);
        assert_eq!(capture.value.get(), 1);
    }

    #[test]
    fn test_single_stack_capture() {
        let grid = Grid::new().with(at(1, 1), stack(Player::B, 3));
        let capture = canonical_capture(&grid, at(1, 2), &RulesConfig::default()).unwrap();
        assert_eq!(capture.cells.as_slice(), &[at(1, 1)]);
        assert_eq!(capture.value.get(), 3);
    }

    #[test]
    fn test_sum_over_six_excluded() {
        let grid = Grid::new()
            .with(at(0, 0), stack(Player::A, 4))
            .with(at(0, 2), stack(Player::B, 5));
        let options = capture_options(&grid, at(0, 1), &RulesConfig::default());

        // {4}, {5}; {4,5} = 9 is out of range
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.cells.len() == 1));

        let best = canonical_capture(&grid, at(0, 1), &RulesConfig::default()).unwrap();
        assert_eq!(best.cells.as_slice(), &[at(0, 2)]);
        assert_eq!(best.value.get(), 5);
    }

    #[test]
    fn test_largest_sum_prefers_combination() {
        let grid = Grid::new()
            .with(at(1, 1), stack(Player::A, 2))
            .with(at(1, 3), stack(Player::B, 3));
        let best = canonical_capture(&grid, at(1, 2), &RulesConfig::default()).unwrap();
        assert_eq!(best.cells.as_slice(), &[at(1, 1), at(1, 3)]);
        assert_eq!(best.value.get(), 5);
    }

    #[test]
    fn test_choice_policies_differ() {
        // Neighbours of (2,2): 6 at (1,1), 1+1+1 elsewhere.
        let grid = Grid::new()
            .with(at(1, 1), stack(Player::B, 6))
            .with(at(1, 2), stack(Player::A, 1))
            .with(at(2, 1), stack(Player::A, 1))
            .with(at(3, 3), stack(Player::B, 1));

        let largest = canonical_capture(&grid, at(2, 2), &RulesConfig::default()).unwrap();
        assert_eq!(largest.value.get(), 6);
        assert_eq!(largest.cells.as_slice(), &[at(1, 1)]);

        let most = RulesConfig::default().with_capture_choice(CaptureChoice::MostStacks);
        let most = canonical_capture(&grid, at(2, 2), &most).unwrap();
        assert_eq!(most.cells.as_slice(), &[at(1, 2), at(2, 1), at(3, 3)]);
        assert_eq!(most.value.get(), 3);
    }

    #[test]
    fn test_tie_keeps_earliest_subset() {
        // {4} at (0,1) and {4} at (1,0) rank equally; together they sum to 8.
        let grid = Grid::new()
            .with(at(0, 1), stack(Player::A, 4))
            .with(at(1, 0), stack(Player::B, 4));
        let best = canonical_capture(&grid, at(0, 0), &RulesConfig::default()).unwrap();
        assert_eq!(best.cells.as_slice(), &[at(0, 1)]);
        assert_eq!(best.value.get(), 4);
    }

    #[test]
    fn test_orthogonal_ignores_diagonals() {
        let grid = Grid::new().with(at(1, 1), stack(Player::B, 3));
        let config = RulesConfig::default().with_neighborhood(Neighborhood::Orthogonal);
        assert!(canonical_capture(&grid, at(0, 0), &config).is_none());
        assert!(canonical_capture(&grid, at(0, 1), &config).is_some());
    }

    #[test]
    fn test_min_captured_stacks() {
        let grid = Grid::new().with(at(1, 1), stack(Player::B, 3));
        let config = RulesConfig::default().with_min_captured_stacks(2);
        assert!(canonical_capture(&grid, at(1, 2), &config).is_none());

        let grid = grid.with(at(1, 3), stack(Player::A, 1));
        let capture = canonical_capture(&grid, at(1, 2), &config).unwrap();
        assert_eq!(capture.cells.len(), 2);
        assert_eq!(capture.value.get(), 4);
    }

    #[test]
    fn test_occupied_target() {
        let grid = Grid::new()
            .with(at(0, 0), stack(Player::A, 1))
            .with(at(0, 1), stack(Player::B, 2));
        assert!(capture_options(&grid, at(0, 0), &RulesConfig::default()).is_empty());
        assert!(canonical_capture(&grid, at(0, 0), &RulesConfig::default()).is_none());
    }
}
