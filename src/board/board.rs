//! Board structure with move counting

use std::fmt;

use super::grid::{GridIter, PackedGrid};
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: packed intersections plus the number of committed moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: PackedGrid,
    /// Committed moves (0-225); even = Black to move
    move_count: u8,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: PackedGrid::new(),
            move_count: 0,
        }
    }

    /// Clear all intersections and the move counter
    pub fn reset(&mut self) {
        self.grid.clear();
        self.move_count = 0;
    }

    /// Get stone at position; anything off the board reads `OutOfBoard`
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if pos.is_null() {
            return Stone::OutOfBoard;
        }
        self.grid.get(pos)
    }

    /// Write a stone; positions off the board are ignored
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        if pos.is_null() || stone == Stone::OutOfBoard {
            return;
        }
        self.grid.set(pos, stone);
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Count one committed move, saturating at a full board
    #[inline]
    pub fn advance(&mut self) {
        if (self.move_count as usize) < TOTAL_CELLS {
            self.move_count += 1;
        }
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count as usize
    }

    #[inline]
    pub fn is_black_turn(&self) -> bool {
        self.move_count % 2 == 0
    }

    /// Color of the side to move
    #[inline]
    pub fn to_move(&self) -> Stone {
        if self.is_black_turn() {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// No move has been committed yet
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.move_count == 0
    }

    /// Every intersection has been played
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.move_count as usize == TOTAL_CELLS
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.grid.count(Stone::Black) + self.grid.count(Stone::White)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// All intersections as `(Pos, Stone)` in row-major order
    pub fn iter(&self) -> GridIter<'_> {
        self.grid.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text dump, top row first: `X` black, `O` white, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..BOARD_SIZE {
                let c = match self.get(Pos::new(x as u8, y as u8)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    _ => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)
    }
}
