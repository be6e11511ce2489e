use byteorder::{ByteOrder, LE};

use crate::color::Color32;
use crate::dxt;
use crate::etc;

pub const NUM_SELECTOR_RANGES: usize = 6;
pub const NUM_SELECTOR_MAPPINGS: usize = 10;

/// Number of solutions in the full conversion table: 8 intensity tables,
/// 32 base values, 6 selector ranges, 10 selector mappings.
pub const TABLE_SIZE: usize = 8 * 32 * NUM_SELECTOR_RANGES * NUM_SELECTOR_MAPPINGS;

// Inclusive (low, high) subsets of the ETC1 selectors considered when
// scoring an endpoint pair. The order is significant, consumers index the
// table by it.
#[rustfmt::skip]
pub static SELECTOR_RANGES: [(usize, usize); NUM_SELECTOR_RANGES] = [
    (0, 3),

    (1, 3),
    (0, 2),

    (1, 2),

    (2, 3),
    (0, 1),
];

// Fixed remappings from ETC1 selector index to DXT1 ramp level.
#[rustfmt::skip]
pub static SELECTOR_MAPPINGS: [[u8; 4]; NUM_SELECTOR_MAPPINGS] = [
    [ 0, 0, 1, 1 ],
    [ 0, 0, 1, 2 ],
    [ 0, 0, 1, 3 ],
    [ 0, 0, 2, 3 ],
    [ 0, 1, 1, 1 ],
    [ 0, 1, 2, 2 ],
    [ 0, 1, 2, 3 ],
    [ 0, 2, 3, 3 ],
    [ 1, 2, 2, 2 ],
    [ 1, 2, 3, 3 ],
];

/// Best 6-bit DXT1 endpoint pair for one table cell, with the total squared
/// green-channel error it achieves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub lo: u8,
    pub hi: u8,
    pub err: u16,
}

impl Solution {
    pub const FILE_SIZE: usize = 4;

    pub fn from_bytes(buf: &[u8]) -> Self {
        Self {
            lo: buf[0],
            hi: buf[1],
            err: LE::read_u16(&buf[2..]),
        }
    }

    pub fn to_bytes(self) -> [u8; Self::FILE_SIZE] {
        let mut buf = [self.lo, self.hi, 0, 0];
        LE::write_u16(&mut buf[2..], self.err);
        buf
    }
}

/// Linear index of the solution for the given intensity table, base green
/// value, selector range and selector mapping.
pub fn table_index(inten: usize, g: usize, range_idx: usize, mapping_idx: usize) -> usize {
    assert!(inten < 8);
    assert!(g < 32);
    assert!(range_idx < NUM_SELECTOR_RANGES);
    assert!(mapping_idx < NUM_SELECTOR_MAPPINGS);

    ((inten * 32 + g) * NUM_SELECTOR_RANGES + range_idx) * NUM_SELECTOR_MAPPINGS + mapping_idx
}

/// Generates the full conversion table into the newly allocated result.
pub fn conversion_table() -> Vec<Solution> {
    let mut table = vec![Solution::default(); TABLE_SIZE];
    create_conversion_table(&mut table);
    table
}

/// Fills `table` with the best DXT1 6-bit endpoint pair for every
/// (intensity, base value, selector range, selector mapping) combination.
///
/// For each cell, every (lo, hi) pair is tried and scored by the squared
/// green-channel difference between the ETC1 subblock colors and the ramp
/// levels the mapping assigns them to, summed over the selector range. Ties
/// go to the first pair found with hi in the outer loop, which keeps the
/// output bit-exact with the reference tables.
pub fn create_conversion_table(table: &mut [Solution]) {
    assert_eq!(table.len(), TABLE_SIZE);

    let mut n = 0;

    for inten in 0..8 {
        for g in 0..32u8 {
            let packed = etc::pack_color5(Color32::new(g, g, g, 255), false, 127);
            let block_colors = etc::get_diff_subblock_colors(packed, inten);

            // Only the green channel participates in scoring
            let greens = [
                block_colors[0][1] as i32,
                block_colors[1][1] as i32,
                block_colors[2][1] as i32,
                block_colors[3][1] as i32,
            ];

            for &(low_selector, high_selector) in SELECTOR_RANGES.iter() {
                for mapping in SELECTOR_MAPPINGS.iter() {
                    let mut best_lo = 0;
                    let mut best_hi = 0;
                    let mut best_err = u32::MAX;

                    for hi in 0..64u8 {
                        for lo in 0..64u8 {
                            let ramp = dxt::interpolate_ramp(lo, hi);

                            let mut total_err = 0;
                            for s in low_selector..=high_selector {
                                let err = greens[s] - ramp[mapping[s] as usize] as i32;
                                total_err += (err * err) as u32;
                            }

                            if total_err < best_err {
                                best_err = total_err;
                                best_lo = lo;
                                best_hi = hi;
                            }
                        }
                    }

                    assert!(best_err <= u16::MAX as u32);

                    table[n] = Solution {
                        lo: best_lo,
                        hi: best_hi,
                        err: best_err as u16,
                    };

                    n += 1;
                }
            }
        }
    }
}
