//! Renju referee for a 15x15 board
//!
//! Black moves first, opens on the center point and is restricted: an
//! overline, a double-four or a double-three loses on the spot. Exactly five
//! in a row wins for Black; five or more wins for White.
//!
//! # Architecture
//!
//! - [`board`]: packed board storage and line windows
//! - [`rules`]: shape tables, shape counting, forbidden-point resolution
//!   and the outcome of a move
//! - [`game`]: the placement gate and move commits
//!
//! # Quick Start
//!
//! ```
//! use renju::{Game, Outcome, Pos};
//!
//! let mut game = Game::new();
//! assert!(game.can_place(Pos::new(7, 7)));
//! let outcome = game.commit_move("h8".parse().unwrap()).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! ```
//!
//! The engine never chooses moves; it only judges the ones it is given.

pub mod board;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, ParsePosError, Pos, Stone, BOARD_SIZE, CENTER, TOTAL_CELLS};
pub use game::{Game, MoveError};
pub use rules::{Counter, Outcome};
