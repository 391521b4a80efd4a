//! The computer's scheduled reply.
//!
//! At most one reply is pending at a time. It is tagged with the turn it
//! was scheduled for, so a reply that outlives its position is recognised
//! as stale instead of being played against a different board.

use std::time::Instant;

/// A reply waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReply {
    /// Earliest instant the reply may run.
    pub due: Instant,
    /// Board turn the reply was scheduled for.
    pub turn: u32,
}

/// Single-slot holder for the pending reply.
#[derive(Debug, Default)]
pub struct ReplySlot {
    pending: Option<PendingReply>,
}

impl ReplySlot {
    /// Schedule a reply. Returns `false` if one is already pending.
    pub fn request(&mut self, due: Instant, turn: u32) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingReply { due, turn });
        true
    }

    /// Remove and return the pending reply if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingReply> {
        match self.pending {
            Some(reply) if now >= reply.due => self.pending.take(),
            _ => None,
        }
    }

    /// Drop the pending reply. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending reply.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|reply| reply.due)
    }
}
