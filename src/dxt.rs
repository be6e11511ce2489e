/// Extends a 6-bit component to 8 bits by replicating the top 2 bits.
pub fn extend_6_to_8(x: u8) -> u8 {
    (x << 2) | (x >> 4)
}

/// Returns the four levels of a DXT1 color ramp for one 6-bit component:
/// the two extended endpoints and the two interior levels at 1/3 and 2/3,
/// interpolated with the truncating integer division the format specifies.
pub fn interpolate_ramp(lo: u8, hi: u8) -> [u8; 4] {
    let c0 = extend_6_to_8(lo) as u16;
    let c3 = extend_6_to_8(hi) as u16;

    let c1 = (c0 * 2 + c3) / 3;
    let c2 = (c3 * 2 + c0) / 3;

    [c0 as u8, c1 as u8, c2 as u8, c3 as u8]
}
