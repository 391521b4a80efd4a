//! Headless game session: a board, a computer opponent and the computer's
//! delayed reply.
//!
//! Everything runs on the caller's thread. The "delay" is a deadline the
//! host loop polls for, not a background task, and it is cancelled together
//! with the session.
//!
//! ## Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use cephalopod::board::Board;
//! use cephalopod::core::{Player, SessionConfig};
//! use cephalopod::session::Session;
//! use cephalopod::strategy::RandomStrategy;
//!
//! let mut session = Session::new(Board::new(), RandomStrategy::new(42), SessionConfig::default());
//! let start = Instant::now();
//!
//! session.human_move(2, 2, start).unwrap();
//! let deadline = session.next_deadline().unwrap();
//! assert_eq!(deadline, start + Duration::from_millis(500));
//!
//! let reply = session.poll(deadline).unwrap();
//! assert_eq!(session.board().current_turn(), 2);
//! assert_eq!(reply.player, Player::B);
//!
//! session.close();
//! assert!(session.human_move(0, 0, deadline).is_err());
//! ```

pub mod game;
pub mod reply;

pub use game::{Session, SessionError};
pub use reply::{PendingReply, ReplySlot};
