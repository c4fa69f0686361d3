//! Line windows through an anchor intersection
//!
//! A [`Line`] is the 11 intersections at offsets `-5..=5` from the anchor
//! along one [`Orientation`], wide enough to see an overline that ends on the
//! anchor. Pattern matching works on its packed form:
//! cell `k` occupies bits `2k..2k+2` and the orientation tag the top two
//! bits, so every shape test is a single mask and compare.

use super::{Board, Pos, Stone};

/// Cells per window
pub const LINE_LEN: usize = 11;
/// Index of the anchor inside the window
pub const ANCHOR: usize = 5;

const TAG_SHIFT: u32 = 30;

/// The four line directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row, x increasing
    Horizontal = 0,
    /// Along a column, y increasing
    Vertical = 1,
    /// x and y increasing
    Downward = 2,
    /// x decreasing while y increases
    Upward = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Downward,
        Orientation::Upward,
    ];

    /// Board delta between two consecutive cells of the window
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::Downward => (1, 1),
            Orientation::Upward => (-1, 1),
        }
    }

    /// Recover the orientation from an encoded line's tag bits
    #[inline]
    pub const fn from_encoded(code: u32) -> Orientation {
        match code >> TAG_SHIFT {
            0 => Orientation::Horizontal,
            1 => Orientation::Vertical,
            2 => Orientation::Downward,
            _ => Orientation::Upward,
        }
    }

    /// Tag placed in the two highest bits of an encoded line
    #[inline]
    pub const fn tag(self) -> u32 {
        (self as u32) << TAG_SHIFT
    }

    /// Position `offset` cells away from `anchor` along this orientation
    #[inline]
    pub fn project(self, anchor: Pos, offset: i32) -> Pos {
        let (dx, dy) = self.step();
        anchor.offset(dx * offset, dy * offset)
    }
}

/// Window of absolute cell states centred on an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub orientation: Orientation,
    pub cells: [Stone; LINE_LEN],
}

impl Line {
    /// Read the window through `pos`; steps off the board read `OutOfBoard`.
    pub fn extract(board: &Board, pos: Pos, orientation: Orientation) -> Line {
        let mut cells = [Stone::OutOfBoard; LINE_LEN];
        for (k, cell) in cells.iter_mut().enumerate() {
            let offset = k as i32 - ANCHOR as i32;
            *cell = board.get(orientation.project(pos, offset));
        }
        Line { orientation, cells }
    }

    /// Cell at a signed offset from the anchor (`OutOfBoard` outside the window)
    #[inline]
    pub fn at(&self, offset: i32) -> Stone {
        let k = ANCHOR as i32 + offset;
        if (0..LINE_LEN as i32).contains(&k) {
            self.cells[k as usize]
        } else {
            Stone::OutOfBoard
        }
    }

    /// Pack into 2-bit cells with the orientation tag on top
    pub fn encode(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .fold(self.orientation.tag(), |acc, (k, s)| {
                acc | (s.code() << (2 * k as u32))
            })
    }

    /// Inverse of [`Line::encode`]
    pub fn decode(code: u32) -> Line {
        let mut cells = [Stone::OutOfBoard; LINE_LEN];
        for (k, cell) in cells.iter_mut().enumerate() {
            *cell = Stone::from_code(code >> (2 * k as u32));
        }
        Line {
            orientation: Orientation::from_encoded(code),
            cells,
        }
    }
}

/// Shorthand for `Line::extract(..).encode()`
#[inline]
pub fn extract(board: &Board, pos: Pos, orientation: Orientation) -> u32 {
    Line::extract(board, pos, orientation).encode()
}
