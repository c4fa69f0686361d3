//! Shape tables for line classification
//!
//! Every table is written from the point of view of the side being evaluated,
//! over the *relative* line encoding produced by
//! [`relative`](super::counter::relative): two bits per cell, cell `k` at bits
//! `2k..2k+2`, the anchor at cell 5 (bits 10-11). Binary literals are grouped
//! by cells `10-9`, `8-6`, `5-3` and `2-0`, highest cell first.
//!
//! A line matches an entry when `line & mask == expected`. Inside a table the
//! first match wins; the classifier tests tables from the most to the least
//! severe shape.

/// Relative cell code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Off the board
    Unknown = 0b00,
    /// Stone of the side being evaluated
    Attacker = 0b01,
    /// Stone of the other side
    Defender = 0b10,
    Empty = 0b11,
}

/// One mask/expected-value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    pub mask: u32,
    pub expected: u32,
}

impl Pack {
    const fn new(mask: u32, expected: u32) -> Self {
        Self { mask, expected }
    }

    #[inline]
    pub fn matches(&self, line: u32) -> bool {
        line & self.mask == self.expected
    }
}

/// A three shape plus the offsets, relative to the anchor, of the cells that
/// turn it into a four.
///
/// When `offsets[0] == 0` the three is split (`_A_AA_`): `offsets[1]` is the
/// gap and `offsets[2..]` are the two ends. Otherwise the three is solid and
/// the offsets come in pairs, one pair per side: the cell that extends the
/// three, then the cell beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeShape {
    pub pack: Pack,
    pub offsets: [i32; 4],
}

impl ThreeShape {
    const fn new(mask: u32, expected: u32, offsets: [i32; 4]) -> Self {
        Self {
            pack: Pack::new(mask, expected),
            offsets,
        }
    }

    /// Split threes list the anchor itself first
    #[inline]
    pub fn is_split(&self) -> bool {
        self.offsets[0] == 0
    }
}

/// Six or more in a row: every six-window covering the anchor
pub const OVERLINE: [Pack; 6] = [
    Pack::new(0b0000_000000_111111_111111, 0b0000_000000_010101_010101),
    Pack::new(0b0000_000011_111111_111100, 0b0000_000001_010101_010100),
    Pack::new(0b0000_001111_111111_110000, 0b0000_000101_010101_010000),
    Pack::new(0b0000_111111_111111_000000, 0b0000_010101_010101_000000),
    Pack::new(0b0011_111111_111100_000000, 0b0001_010101_010100_000000),
    Pack::new(0b1111_111111_110000_000000, 0b0101_010101_010000_000000),
];

/// Exactly the five-windows covering the anchor: `AAAAA`
pub const FIVE: [Pack; 5] = [
    Pack::new(0b0000_000000_111111_111100, 0b0000_000000_010101_010100),
    Pack::new(0b0000_000011_111111_110000, 0b0000_000001_010101_010000),
    Pack::new(0b0000_001111_111111_000000, 0b0000_000101_010101_000000),
    Pack::new(0b0000_111111_111100_000000, 0b0000_010101_010100_000000),
    Pack::new(0b0011_111111_110000_000000, 0b0001_010101_010000_000000),
];

/// Two fours on one line sharing the anchor: `AAA_A_AAA`, `AA_AA_AA`, ...
pub const DOUBLE_FOUR: [Pack; 6] = [
    Pack::new(0b0011_111111_111111_111100, 0b0001_010111_011101_010100),
    Pack::new(0b0000_111111_111111_111100, 0b0000_010111_010111_010100),
    Pack::new(0b0011_111111_111111_110000, 0b0001_011101_011101_010000),
    Pack::new(0b0000_001111_111111_111100, 0b0000_000111_010101_110100),
    Pack::new(0b0000_111111_111111_110000, 0b0000_011101_010111_010000),
    Pack::new(0b0011_111111_111111_000000, 0b0001_110101_011101_000000),
];

/// Four stones and one empty cell in a five-window covering the anchor
pub const FOUR: [Pack; 20] = [
    Pack::new(0b0000_000000_111111_111100, 0b0000_000000_010101_011100),
    Pack::new(0b0000_000011_111111_110000, 0b0000_000011_010101_010000),
    Pack::new(0b0000_000011_111111_110000, 0b0000_000001_010101_110000),
    Pack::new(0b0000_001111_111111_000000, 0b0000_001101_010101_000000),
    Pack::new(0b0000_001111_111111_000000, 0b0000_000101_010111_000000),
    Pack::new(0b0000_111111_111100_000000, 0b0000_110101_010100_000000),
    Pack::new(0b0000_111111_111100_000000, 0b0000_010101_011100_000000),
    Pack::new(0b0011_111111_110000_000000, 0b0011_010101_010000_000000),
    Pack::new(0b0000_000000_111111_111100, 0b0000_000000_010101_110100),
    Pack::new(0b0000_001111_111111_000000, 0b0000_000111_010101_000000),
    Pack::new(0b0000_000011_111111_110000, 0b0000_000001_010111_010000),
    Pack::new(0b0000_111111_111100_000000, 0b0000_011101_010100_000000),
    Pack::new(0b0000_001111_111111_000000, 0b0000_000101_011101_000000),
    Pack::new(0b0011_111111_110000_000000, 0b0001_110101_010000_000000),
    Pack::new(0b0000_000000_111111_111100, 0b0000_000000_010111_010100),
    Pack::new(0b0000_111111_111100_000000, 0b0000_010111_010100_000000),
    Pack::new(0b0000_000011_111111_110000, 0b0000_000001_011101_010000),
    Pack::new(0b0011_111111_110000_000000, 0b0001_011101_010000_000000),
    Pack::new(0b0000_000000_111111_111100, 0b0000_000000_011101_010100),
    Pack::new(0b0011_111111_110000_000000, 0b0001_010111_010000_000000),
];

/// Open threes, solid (`__AAA_`, `_AAA__`) and split (`_A_AA_`, `_AA_A_`)
pub const THREE: [ThreeShape; 12] = [
    ThreeShape::new(0b0000_000011_111111_111100, 0b0000_000011_010101_111100, [-3, -4, 1, 2]),
    ThreeShape::new(0b0000_001111_111111_110000, 0b0000_001111_010101_110000, [-3, -4, 1, 2]),
    ThreeShape::new(0b0000_001111_111111_110000, 0b0000_001101_010111_110000, [-2, -3, 2, 3]),
    ThreeShape::new(0b0000_111111_111111_000000, 0b0000_111101_010111_000000, [-2, -3, 2, 3]),
    ThreeShape::new(0b0000_111111_111111_000000, 0b0000_110101_011111_000000, [-1, -2, 3, 4]),
    ThreeShape::new(0b0011_111111_111100_000000, 0b0011_110101_011100_000000, [-1, -2, 3, 4]),
    ThreeShape::new(0b0000_000011_111111_111100, 0b0000_000011_010111_011100, [0, -2, -4, 1]),
    ThreeShape::new(0b0000_111111_111111_000000, 0b0000_110111_010111_000000, [0, 1, -2, 3]),
    ThreeShape::new(0b0000_001111_111111_110000, 0b0000_001101_011101_110000, [0, -1, -3, 2]),
    ThreeShape::new(0b0011_111111_111100_000000, 0b0011_011101_011100_000000, [0, 2, -1, 4]),
    ThreeShape::new(0b0000_000011_111111_111100, 0b0000_000011_011101_011100, [0, -1, -4, 1]),
    ThreeShape::new(0b0011_111111_111100_000000, 0b0011_010111_011100_000000, [0, 1, -1, 4]),
];

/// Any entry of `table` matches
#[inline]
pub fn exists(line: u32, table: &[Pack]) -> bool {
    table.iter().any(|p| p.matches(line))
}

/// First three shape matching `line`
#[inline]
pub fn find_three(line: u32) -> Option<&'static ThreeShape> {
    THREE.iter().find(|t| t.pack.matches(line))
}
