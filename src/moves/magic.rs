//! Magic bitboard discovery and lookup for sliding pieces.
//!
//! For every square the relevant occupancy mask is hashed into a dense table
//! index with `((occupancy & mask) * magic) >> shift`. Magic numbers are found
//! at startup by randomized search: candidates are sparse random `u64`s, and a
//! candidate is accepted only if every subset of the mask lands in a slot that
//! is either empty or already holds the identical attack set.
//!
//! The generator is seeded so the same magics (and table layout) come out of
//! every run.

use std::time::Instant;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::{BitBoard, Square};
use crate::moves::sliding_rays::{relevant_occupancy_mask, trace_attacks, Slider};

const MAGIC_SEED: u64 = 0x6D61_6769_635F_6368;

/// Per-square hashing parameters into a shared attack vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MagicEntry {
    pub mask: BitBoard,
    pub magic: u64,
    pub shift: u32,
    pub offset: usize,
}

impl MagicEntry {
    #[inline]
    pub fn index(&self, occupancy: BitBoard) -> usize {
        let relevant = (occupancy & self.mask).bits();
        self.offset + (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// All 64 magic entries for one slider and the attack vector they index.
#[derive(Debug, Clone)]
pub struct SliderTable {
    pub entries: [MagicEntry; 64],
    pub attacks: Vec<BitBoard>,
}

impl SliderTable {
    #[inline]
    pub fn attacks(&self, square: Square, occupancy: BitBoard) -> BitBoard {
        let entry = &self.entries[square as usize];
        self.attacks[entry.index(occupancy)]
    }
}

/// Every subset of `mask`, via the carry-rippler `subset = (subset - mask) & mask`.
pub fn occupancy_subsets(mask: BitBoard) -> Vec<BitBoard> {
    let mask = mask.bits();
    let mut subsets = Vec::with_capacity(1usize << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(BitBoard(subset));
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

#[inline]
fn sparse_random_u64(rng: &mut StdRng) -> u64 {
    rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>()
}

/// Searches for a collision-free magic for one square.
///
/// `occupancies[i]` and `attacks[i]` are paired. The returned table has
/// `1 << bits` slots filled according to the accepted magic.
fn find_magic(
    rng: &mut StdRng,
    mask: BitBoard,
    occupancies: &[BitBoard],
    attacks: &[BitBoard],
) -> (u64, Vec<BitBoard>) {
    let bits = mask.count();
    let shift = 64 - bits;
    let size = 1usize << bits;

    let mut table = vec![BitBoard::EMPTY; size];
    // Slot `i` is in use for the current candidate iff `epoch[i] == attempt`.
    let mut epoch = vec![0u64; size];
    let mut attempt = 0u64;

    loop {
        attempt += 1;
        let magic = sparse_random_u64(rng);
        if (mask.bits().wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        let collision_free = occupancies.iter().zip(attacks).all(|(occupancy, attack)| {
            let index = (occupancy.bits().wrapping_mul(magic) >> shift) as usize;
            if epoch[index] != attempt {
                epoch[index] = attempt;
                table[index] = *attack;
                true
            } else {
                table[index] == *attack
            }
        });

        if collision_free {
            return (magic, table);
        }
    }
}

/// Builds the complete lookup table for one slider.
pub(crate) fn build_slider_table(slider: Slider, rng: &mut StdRng) -> SliderTable {
    let started_at = Instant::now();
    let mut entries = [MagicEntry::default(); 64];
    let mut all_attacks = Vec::new();

    for square in 0..64u8 {
        let mask = relevant_occupancy_mask(slider, square);
        let occupancies = occupancy_subsets(mask);
        let attacks: Vec<BitBoard> = occupancies
            .iter()
            .map(|occupancy| trace_attacks(slider, square, *occupancy))
            .collect();

        let (magic, table) = find_magic(rng, mask, &occupancies, &attacks);

        entries[square as usize] = MagicEntry {
            mask,
            magic,
            shift: 64 - mask.count(),
            offset: all_attacks.len(),
        };
        all_attacks.extend(table);
    }

    trace!(
        "built {:?} magic table: {} slots in {:?}",
        slider,
        all_attacks.len(),
        started_at.elapsed()
    );

    SliderTable {
        entries,
        attacks: all_attacks,
    }
}

/// Deterministic RNG for magic discovery.
pub(crate) fn magic_rng() -> StdRng {
    StdRng::seed_from_u64(MAGIC_SEED)
}
