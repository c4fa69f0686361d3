//! Game outcome after a committed move
//!
//! Outcomes are reported from Black's side: Black completing exactly five
//! wins, while Black playing a forbidden shape or White completing five (or
//! more) loses. A full board with neither is a tie.

use std::fmt;

use log::debug;

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

use super::counter::classify;

/// Game state from Black's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Black made five
    Won,
    /// Black played a forbidden move, or White made five
    Lost,
    /// Board full without a winner
    Tied,
}

impl Outcome {
    /// No further moves are accepted
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Color of the winning side, if any
    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::Won => Some(Stone::Black),
            Outcome::Lost => Some(Stone::White),
            Outcome::InProgress | Outcome::Tied => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let caption = match self {
            Outcome::InProgress => "In Progress",
            Outcome::Won => "Black Win",
            Outcome::Lost => "White Win",
            Outcome::Tied => "Tied",
        };
        f.write_str(caption)
    }
}

/// Judge the stone just placed at `pos`.
///
/// Call after the stone is on the board and before the move counter
/// advances: the side to move is taken to be the side that played `pos`.
pub fn judge(board: &mut Board, pos: Pos) -> Outcome {
    let restricted = board.is_black_turn();
    let counter = classify(board, pos, restricted);

    let outcome = if restricted && counter.is_forbidden_shape() {
        Outcome::Lost
    } else if counter.fives > 0 {
        if restricted {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    } else if board.move_count() + 1 >= TOTAL_CELLS {
        Outcome::Tied
    } else {
        Outcome::InProgress
    };

    debug!(
        "{} at {pos} (move {}): threes={} fours={} fives={} overlines={} -> {outcome}",
        board.to_move(),
        board.move_count() + 1,
        counter.threes,
        counter.fours,
        counter.fives,
        counter.overlines,
    );
    outcome
}
