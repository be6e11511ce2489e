#![warn(clippy::all)]

//! Generator for the ETC1 to DXT1 6-bit endpoint conversion table used when
//! transcoding ETC1 texture blocks into DXT1 blocks.
//!
//! For every combination of ETC1 intensity table, base green value, selector
//! range and selector mapping, the generator exhaustively searches the 64x64
//! DXT1 endpoint pairs for the one minimizing the squared green-channel error
//! and records it together with that error. The resulting table lets a
//! transcoder pick DXT1 endpoints with a single lookup instead of redoing the
//! search per block.

mod color;
mod dxt;
mod etc;
mod table;

pub use color::Color32;
pub use dxt::{extend_6_to_8, interpolate_ramp};
pub use etc::{get_diff_subblock_colors, pack_color5, unpack_color5, ETC1_MODIFIERS};
pub use table::{
    conversion_table, create_conversion_table, table_index, Solution, NUM_SELECTOR_MAPPINGS,
    NUM_SELECTOR_RANGES, SELECTOR_MAPPINGS, SELECTOR_RANGES, TABLE_SIZE,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Parses a reference conversion table from its byte form: `TABLE_SIZE`
/// records of 4 bytes each, `{lo: u8, hi: u8, err: u16 little-endian}`.
pub fn parse_reference_table(buf: &[u8]) -> Result<Vec<Solution>> {
    let expected = TABLE_SIZE * Solution::FILE_SIZE;
    if buf.len() != expected {
        return Err(format!(
            "Expected {} byte reference table, got {} bytes",
            expected,
            buf.len()
        )
        .into());
    }

    Ok(buf
        .chunks_exact(Solution::FILE_SIZE)
        .map(Solution::from_bytes)
        .collect())
}

/// Serializes a conversion table to the byte layout of the reference tables.
pub fn table_to_bytes(table: &[Solution]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(table.len() * Solution::FILE_SIZE);
    for solution in table {
        buf.extend_from_slice(&solution.to_bytes());
    }
    buf
}

/// Compares a generated table against a reference table, reporting the first
/// differing record.
pub fn verify_table(table: &[Solution], reference: &[Solution]) -> Result<()> {
    if table.len() != reference.len() {
        return Err(format!(
            "Expected {} solutions, got {}",
            reference.len(),
            table.len()
        )
        .into());
    }

    for (i, (actual, expected)) in table.iter().zip(reference.iter()).enumerate() {
        if actual != expected {
            return Err(format!(
                "Mismatch at index {}: got {:?}, expected {:?}",
                i, actual, expected
            )
            .into());
        }
    }

    Ok(())
}
