//! Game state management: the placement gate and move commits

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, Pos, Stone, CENTER};
use crate::rules::{forbidden_moves, judge, Outcome};

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is not on the board")]
    OffBoard(Pos),
    #[error("{0} is already occupied")]
    Occupied(Pos),
    #[error("the game is over ({0})")]
    GameOver(Outcome),
    #[error("the first move must be played at h8, not {0}")]
    OpeningNotCenter(Pos),
}

/// One game: the board, its outcome so far, and the last committed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    outcome: Outcome,
    last_move: Option<Pos>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        info!("new game");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Color of the side to move
    #[inline]
    pub fn to_move(&self) -> Stone {
        self.board.to_move()
    }

    /// Check whether `pos` may be played now, and why not otherwise.
    ///
    /// Forbidden points are not rejected here: Black may play them and loses.
    pub fn check_move(&self, pos: Pos) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if !pos.on_board() {
            return Err(MoveError::OffBoard(pos));
        }
        if self.board.is_pending() && pos != CENTER {
            return Err(MoveError::OpeningNotCenter(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(())
    }

    #[inline]
    pub fn can_place(&self, pos: Pos) -> bool {
        self.check_move(pos).is_ok()
    }

    /// Place the side to move on `pos`, judge the move, and pass the turn.
    ///
    /// A rejected move leaves the game untouched.
    pub fn commit_move(&mut self, pos: Pos) -> Result<Outcome, MoveError> {
        self.check_move(pos)?;

        let stone = self.board.to_move();
        self.board.set(pos, stone);
        let outcome = judge(&mut self.board, pos);
        self.board.advance();

        self.outcome = outcome;
        self.last_move = Some(pos);
        if outcome.is_terminal() {
            info!("{stone} at {pos} ends the game: {outcome}");
        } else {
            debug!("{stone} at {pos}");
        }
        Ok(outcome)
    }

    /// Empty intersections where Black would lose by a forbidden shape
    pub fn forbidden_points(&self) -> Vec<Pos> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        forbidden_moves(&mut scratch)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
