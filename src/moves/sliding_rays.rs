//! Ray tracing for sliding pieces.
//!
//! These routines walk rays square by square. They are far too slow for move
//! generation and exist to seed and verify the magic lookup tables: relevant
//! occupancy masks come from `relevant_occupancy_mask`, and the reference
//! attack set for every masked occupancy comes from `trace_attacks`.

use crate::game_state::chess_types::{BitBoard, Square};

/// The two sliding movement patterns; queens combine both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Bishop,
    Rook,
}

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Slider {
    #[inline]
    pub const fn directions(self) -> &'static [(i32, i32); 4] {
        match self {
            Slider::Bishop => &BISHOP_DIRECTIONS,
            Slider::Rook => &ROOK_DIRECTIONS,
        }
    }
}

/// Attack set from `square` given blockers in `occupancy`.
/// Each ray includes the first blocker it meets.
pub fn trace_attacks(slider: Slider, square: Square, occupancy: BitBoard) -> BitBoard {
    let mut attacks = BitBoard::EMPTY;
    for &(file_step, rank_step) in slider.directions() {
        let mut file = i32::from(square % 8) + file_step;
        let mut rank = i32::from(square / 8) + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let target = (rank * 8 + file) as Square;
            attacks.set(target);
            if occupancy.test(target) {
                break;
            }
            file += file_step;
            rank += rank_step;
        }
    }
    attacks
}

/// Squares whose occupancy can change the attack set from `square`.
/// The last square of each ray is excluded: a blocker there changes nothing.
pub fn relevant_occupancy_mask(slider: Slider, square: Square) -> BitBoard {
    let mut mask = BitBoard::EMPTY;
    for &(file_step, rank_step) in slider.directions() {
        let mut file = i32::from(square % 8) + file_step;
        let mut rank = i32::from(square / 8) + rank_step;

        while (0..8).contains(&(file + file_step)) && (0..8).contains(&(rank + rank_step)) {
            mask.set((rank * 8 + file) as Square);
            file += file_step;
            rank += rank_step;
        }
    }
    mask
}
