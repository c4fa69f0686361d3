//! Shape counting around one intersection
//!
//! The classifier recolors each line relative to the side being evaluated,
//! then tests the shape tables in descending severity. Only one category can
//! fire per orientation; counts add up across the four orientations.

use crate::board::line::{self, LINE_LEN};
use crate::board::{Board, Orientation, Pos, Stone};

use super::forbidden::three_is_live;
use super::patterns::{self, Role, DOUBLE_FOUR, FIVE, FOUR, OVERLINE};

const CELL_BITS: u32 = 2 * LINE_LEN as u32;
const TAG_MASK: u32 = 0b11 << 30;

/// Shape counts for one candidate intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    /// Intersection every line was centred on
    pub anchor: Pos,
    /// Validated open threes
    pub threes: u32,
    /// Fours; a double-four on one line counts twice
    pub fours: u32,
    pub fives: u32,
    /// Six or more in a row
    pub overlines: u32,
}

impl Counter {
    pub fn new(anchor: Pos) -> Self {
        Self {
            anchor,
            threes: 0,
            fours: 0,
            fives: 0,
            overlines: 0,
        }
    }

    /// Overline, double-four or double-three: a losing move for Black
    #[inline]
    pub fn is_forbidden_shape(&self) -> bool {
        self.overlines > 0 || self.fours >= 2 || self.threes >= 2
    }

    /// The intersection cannot serve Black as a completion point: either it is
    /// a forbidden shape or it already finishes a five.
    #[inline]
    pub fn blocks_completion(&self) -> bool {
        self.is_forbidden_shape() || self.fives > 0
    }
}

/// Recolor an absolute encoded line relative to the mover.
///
/// The mover's stones become `Attacker`, the other side's `Defender`; empty
/// cells become `Empty` and off-board cells `Unknown`. The orientation tag is
/// carried over unchanged.
pub fn relative(line: u32, mover: Stone) -> u32 {
    let mut out = line & TAG_MASK;
    for shift in (0..CELL_BITS).step_by(2) {
        let role = match Stone::from_code(line >> shift) {
            Stone::Empty => Role::Empty,
            Stone::OutOfBoard => Role::Unknown,
            s if s == mover => Role::Attacker,
            _ => Role::Defender,
        };
        out |= (role as u32) << shift;
    }
    out
}

/// Classify one encoded line through `counter.anchor` and add the result.
///
/// `restricted` is true when the mover is Black: only then are overlines,
/// fours and threes counted. A matched three is only counted once the
/// forbidden-point check confirms it can still become a four.
pub(crate) fn count_line(
    board: &mut Board,
    line: u32,
    counter: &mut Counter,
    restricted: bool,
    depth: usize,
) {
    let mover = if restricted { Stone::Black } else { Stone::White };
    let rel = relative(line, mover);

    if restricted && patterns::exists(rel, &OVERLINE) {
        counter.overlines += 1;
    } else if patterns::exists(rel, &FIVE) {
        counter.fives += 1;
    } else if restricted && patterns::exists(rel, &DOUBLE_FOUR) {
        counter.fours += 2;
    } else if restricted && patterns::exists(rel, &FOUR) {
        counter.fours += 1;
    } else if restricted {
        if let Some(shape) = patterns::find_three(rel) {
            let orientation = Orientation::from_encoded(rel);
            if three_is_live(board, counter.anchor, orientation, shape, depth) {
                counter.threes += 1;
            }
        }
    }
}

/// Classify all four lines through `pos` for the given mover.
pub fn classify(board: &mut Board, pos: Pos, restricted: bool) -> Counter {
    classify_at_depth(board, pos, restricted, 0)
}

pub(crate) fn classify_at_depth(
    board: &mut Board,
    pos: Pos,
    restricted: bool,
    depth: usize,
) -> Counter {
    let mut counter = Counter::new(pos);
    for orientation in Orientation::ALL {
        let encoded = line::extract(board, pos, orientation);
        count_line(board, encoded, &mut counter, restricted, depth);
    }
    counter
}
