//! Packed grid storage: two bits per intersection

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

const CELL_MASK: u32 = 0b11;

/// One `u32` per row, 15 cells x 2 bits = 30 bits used.
/// Column `x` lives in bits `2x..2x+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedGrid {
    rows: [u32; BOARD_SIZE],
}

impl PackedGrid {
    /// Create empty grid
    pub const fn new() -> Self {
        Self {
            rows: [0; BOARD_SIZE],
        }
    }

    /// Read the cell at an on-board position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(pos.on_board());
        let shift = pos.x as u32 * 2;
        Stone::from_code(self.rows[pos.y as usize] >> shift)
    }

    /// Write the cell at an on-board position
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(pos.on_board());
        debug_assert!(stone != Stone::OutOfBoard);
        let shift = pos.x as u32 * 2;
        let row = &mut self.rows[pos.y as usize];
        *row = (*row & !(CELL_MASK << shift)) | ((stone.code() & CELL_MASK) << shift);
    }

    /// Clear every cell
    #[inline]
    pub fn clear(&mut self) {
        self.rows = [0; BOARD_SIZE];
    }

    /// Raw packed row
    #[inline]
    pub fn row(&self, y: usize) -> u32 {
        self.rows[y]
    }

    /// Count stones of one color
    pub fn count(&self, stone: Stone) -> u32 {
        self.iter().filter(|&(_, s)| s == stone).count() as u32
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Iterate all intersections in row-major order
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

/// Iterator over every intersection of a `PackedGrid`
pub struct GridIter<'a> {
    grid: &'a PackedGrid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Pos, Stone);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= TOTAL_CELLS {
            return None;
        }
        let pos = Pos::from_index(self.idx);
        self.idx += 1;
        Some((pos, self.grid.get(pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = TOTAL_CELLS - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
