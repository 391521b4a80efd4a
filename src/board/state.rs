//! The board state machine.

use tracing::{debug, info, instrument, trace};

use crate::core::{Coord, Grid, Move, MoveRecord, Player, PlayerMap, RulesConfig};
use crate::rules::{GameResult, Rules};

use super::error::MoveError;

/// One game in progress (or finished).
///
/// The grid only changes through [`Board::try_move`] and its wrappers.
/// A rejected attempt leaves every field untouched.
///
/// ## States
///
/// - **InProgress**: `is_finished() == false`; each legal move advances
///   `turn` by one.
/// - **Finished**: entered on a terminal move (or on construction from a
///   terminal position). Absorbing: every later attempt returns
///   [`MoveError::GameOver`].
///
/// Cloning is cheap: the history is a persistent vector.
#[derive(Clone, Debug)]
pub struct Board {
    rules: Rules,
    grid: Grid,
    turn: u32,
    finished: bool,
    history: im::Vector<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board under the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    /// An empty board under the given rules.
    #[must_use]
    pub fn with_rules(config: RulesConfig) -> Self {
        Self::from_position(Grid::new(), 0, config)
    }

    /// A board set up at an arbitrary position with `turn` moves already
    /// made. The terminal check runs immediately.
    ///
    /// A board at `u32::MAX` turns has no room for another move and starts
    /// finished.
    #[must_use]
    pub fn from_position(grid: Grid, turn: u32, config: RulesConfig) -> Self {
        let rules = Rules::new(config);
        let finished = if turn == u32::MAX {
            true
        } else if turn > 0 {
            rules.is_terminal_after(&grid, Player::for_turn(turn - 1), turn)
        } else {
            !rules.has_legal_move(&grid)
        };

        Self {
            rules,
            grid,
            turn,
            finished,
            history: im::Vector::new(),
        }
    }

    /// Attempt a move for the player whose turn it is.
    ///
    /// Returns `true` if the move was applied. Off-board coordinates,
    /// occupied destinations and moves after the game ended all return
    /// `false` without touching the board.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Like [`Board::attempt_move`], reporting why a move was rejected.
    #[instrument(level = "debug", skip(self), fields(turn = self.turn))]
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<MoveRecord, MoveError> {
        let Some(target) = Coord::new(row, col) else {
            trace!(row, col, "rejected: off the board");
            return Err(MoveError::OutOfBounds { row, col });
        };
        self.play(target)
    }

    /// Play at an already validated coordinate.
    pub fn play(&mut self, target: Coord) -> Result<MoveRecord, MoveError> {
        let next_turn = match self.turn.checked_add(1) {
            Some(next) if !self.finished => next,
            _ => {
                trace!(%target, "rejected: game over");
                return Err(MoveError::GameOver);
            }
        };

        let Some(mv) = self.rules.resolve(&self.grid, target) else {
            trace!(%target, "rejected: occupied");
            return Err(MoveError::Occupied(target));
        };

        let player = self.to_move();
        self.rules.apply(&mut self.grid, player, &mv);

        let record = MoveRecord::new(player, mv, self.turn);
        self.history.push_back(record.clone());
        self.turn = next_turn;

        debug!(
            %player,
            %target,
            height = record.mv.resulting_height().get(),
            captured = record.mv.captured().len(),
            "move applied"
        );

        if self.turn == u32::MAX || self.rules.is_terminal_after(&self.grid, player, self.turn) {
            self.finished = true;
            info!(turn = self.turn, result = ?self.rules.result(&self.grid), "game finished");
        }

        Ok(record)
    }

    /// Current grid, by value.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    /// The player whose move it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.turn)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `true` once the game is over and one player scored strictly more.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result().and_then(|r| r.winner())
    }

    /// Final result, `None` while the game is in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.finished.then(|| self.rules.result(&self.grid))
    }

    /// Current score of each player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.rules.scores(&self.grid)
    }

    /// Legal moves for the player to move; empty once finished.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.finished {
            return Vec::new();
        }
        self.rules.legal_moves(&self.grid)
    }

    /// Moves applied to this board, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}
