//! Board representation for Renju

pub mod board;
pub mod grid;
pub mod line;


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Re-exports
pub use board::Board;
pub use grid::PackedGrid;
pub use line::{Line, Orientation, ANCHOR, LINE_LEN};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// The only legal opening point
pub const CENTER: Pos = Pos { x: 7, y: 7 };

/// Intersection state
///
/// `OutOfBoard` is never stored; it is what boundary queries return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
    OutOfBoard,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    /// Two-bit code used by the packed grid and encoded lines
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            Stone::Empty => 0b00,
            Stone::Black => 0b01,
            Stone::White => 0b10,
            Stone::OutOfBoard => 0b11,
        }
    }

    #[inline]
    pub const fn from_code(code: u32) -> Stone {
        match code & 0b11 {
            0b00 => Stone::Empty,
            0b01 => Stone::Black,
            0b10 => Stone::White,
            _ => Stone::OutOfBoard,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "Empty",
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::OutOfBoard => "OutOfBoard",
        };
        f.write_str(name)
    }
}

/// Position on the board
///
/// `x` is the column and `y` the row, both in `0..15`. The value 15 on either
/// axis marks a position off the board; [`Pos::NULL`] is the canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    /// "No position"
    pub const NULL: Pos = Pos { x: 15, y: 15 };

    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x <= BOARD_SIZE as u8 && y <= BOARD_SIZE as u8);
        Self { x, y }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        !self.on_board()
    }

    #[inline]
    pub fn on_board(self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Step `(dx, dy)` away from this position, or `Pos::NULL` when that
    /// leaves the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        if self.is_null() {
            return Pos::NULL;
        }
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if Pos::is_valid(x, y) {
            Pos::new(x as u8, y as u8)
        } else {
            Pos::NULL
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Coordinates are written column letter first, then the 1-based row: `h8`.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "null");
        }
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePosError {
    #[error("empty coordinate")]
    Empty,
    #[error("column '{0}' is outside a-o")]
    BadColumn(char),
    #[error("row '{0}' is outside 1-15")]
    BadRow(String),
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col = chars.next().ok_or(ParsePosError::Empty)?;
        let lower = col.to_ascii_lowercase();
        if !('a'..='o').contains(&lower) {
            return Err(ParsePosError::BadColumn(col));
        }

        let rest = chars.as_str();
        let row: u8 = rest
            .parse()
            .map_err(|_| ParsePosError::BadRow(rest.to_string()))?;
        if !(1..=BOARD_SIZE as u8).contains(&row) {
            return Err(ParsePosError::BadRow(rest.to_string()));
        }

        Ok(Pos::new(lower as u8 - b'a', row - 1))
    }
}
