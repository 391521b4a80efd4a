//! Human-versus-computer session.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, MoveError};
use crate::core::{MoveRecord, Player, SessionConfig};
use crate::strategy::MoveStrategy;

use super::reply::ReplySlot;

/// Why the session refused a human move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the session is closed")]
    Closed,

    #[error("the computer's reply is still pending")]
    ReplyPending,

    #[error("it is {0}'s turn")]
    NotYourTurn(Player),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// One board, one human, one computer opponent.
///
/// The host loop feeds pointer input to [`Session::human_move`] and calls
/// [`Session::poll`] once [`Session::next_deadline`] has passed. Time is
/// always passed in, so the session never reads a clock itself.
///
/// The pending reply lives inside the session: [`Session::close`] cancels
/// it, and dropping the session drops it, so a reply can never run against
/// a disposed board.
#[derive(Debug)]
pub struct Session<S> {
    board: Board,
    computer: S,
    config: SessionConfig,
    reply: ReplySlot,
    closed: bool,
}

impl<S: MoveStrategy> Session<S> {
    #[must_use]
    pub fn new(board: Board, computer: S, config: SessionConfig) -> Self {
        Self {
            board,
            computer,
            config,
            reply: ReplySlot::default(),
            closed: false,
        }
    }

    /// Schedule the computer's reply if it is the computer's turn and
    /// nothing is pending.
    ///
    /// Call it once to open the game when the computer moves first. Call it
    /// again to resume after [`Session::cancel_pending`], or after `poll`
    /// dropped a reply because the strategy had no usable move.
    ///
    /// Returns `true` if a reply was scheduled.
    pub fn start(&mut self, now: Instant) -> bool {
        self.schedule_reply(now)
    }

    /// Play a human move.
    ///
    /// On success the computer's reply is scheduled `reply_delay` after
    /// `now`, unless the move ended the game.
    #[instrument(level = "debug", skip(self, now))]
    pub fn human_move(&mut self, row: usize, col: usize, now: Instant) -> Result<MoveRecord, SessionError> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        if self.reply.is_pending() {
            return Err(SessionError::ReplyPending);
        }
        if !self.board.is_finished() && self.board.to_move() == self.config.computer {
            return Err(SessionError::NotYourTurn(self.config.computer));
        }

        let record = self.board.try_move(row, col)?;
        self.schedule_reply(now);
        Ok(record)
    }

    /// Run the computer's reply if it is due.
    ///
    /// Returns the applied move. A stale reply, a strategy with nothing to
    /// suggest, or a suggestion the board rejects all drop the reply;
    /// [`Session::start`] schedules a fresh one.
    pub fn poll(&mut self, now: Instant) -> Option<MoveRecord> {
        if self.closed {
            return None;
        }
        let reply = self.reply.take_due(now)?;

        if reply.turn != self.board.current_turn() || self.board.is_finished() {
            debug!(scheduled = reply.turn, turn = self.board.current_turn(), "stale reply dropped");
            return None;
        }

        let player = self.config.computer;
        let grid = self.board.snapshot();
        let Some(target) = self.computer.select(self.board.rules(), &grid, player) else {
            warn!(strategy = self.computer.name(), "strategy found no move");
            return None;
        };

        match self.board.play(target) {
            Ok(record) => {
                debug!(strategy = self.computer.name(), %target, "computer replied");
                if self.board.is_finished() {
                    info!(result = ?self.board.result(), "session game finished");
                }
                Some(record)
            }
            Err(err) => {
                warn!(strategy = self.computer.name(), %target, %err, "strategy suggested an illegal move");
                None
            }
        }
    }

    /// When the host should next call [`Session::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.closed {
            return None;
        }
        self.reply.deadline()
    }

    /// Cancel the pending reply. Returns `true` if there was one.
    ///
    /// The computer keeps the move; [`Session::start`] schedules it again.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.reply.cancel();
        if cancelled {
            debug!("pending reply cancelled");
        }
        cancelled
    }

    /// Tear the session down. Cancels any pending reply; every later call
    /// is rejected or ignored.
    pub fn close(&mut self) {
        if !self.closed {
            self.cancel_pending();
            self.closed = true;
            debug!(turn = self.board.current_turn(), "session closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Check if a computer reply is waiting.
    #[must_use]
    pub fn is_reply_pending(&self) -> bool {
        self.reply.is_pending()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side the human plays.
    #[must_use]
    pub fn human(&self) -> Player {
        self.config.computer.opponent()
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.computer
    }

    fn schedule_reply(&mut self, now: Instant) -> bool {
        if self.closed || self.board.is_finished() || self.board.to_move() != self.config.computer {
            return false;
        }
        let Some(due) = now.checked_add(self.config.reply_delay) else {
            warn!(delay = ?self.config.reply_delay, "reply delay out of range, reply not scheduled");
            return false;
        };
        let scheduled = self.reply.request(due, self.board.current_turn());
        if scheduled {
            debug!(turn = self.board.current_turn(), delay_ms = self.config.reply_delay.as_millis() as u64, "reply scheduled");
        }
        scheduled
    }
}
