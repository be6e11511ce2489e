use crate::color::{clamp255, Color32};

// Modifier tables for the 8 ETC1 intensity levels, indexed by the 2-bit
// selector of the pixel.
#[rustfmt::skip]
pub static ETC1_MODIFIERS: [[i16; 4]; 8] = [
    [   -8,  -2,  2,   8 ],
    [  -17,  -5,  5,  17 ],
    [  -29,  -9,  9,  29 ],
    [  -42, -13, 13,  42 ],
    [  -60, -18, 18,  60 ],
    [  -80, -24, 24,  80 ],
    [ -106, -33, 33, 106 ],
    [ -183, -47, 47, 183 ],
];

/// Packs a color into the 5:5:5 base color format of an ETC1 diff block.
///
/// With `scaled` set the 8-bit components are rescaled to 5 bits with `bias`
/// controlling the rounding, otherwise the low 5 bits are taken as-is.
pub fn pack_color5(color: Color32, scaled: bool, bias: u32) -> u16 {
    let (mut r, mut g, mut b) = (color[0] as u32, color[1] as u32, color[2] as u32);

    if scaled {
        r = (r * 31 + bias) / 255;
        g = (g * 31 + bias) / 255;
        b = (b * 31 + bias) / 255;
    }

    r = r.min(31);
    g = g.min(31);
    b = b.min(31);

    (b | (g << 5) | (r << 10)) as u16
}

/// Unpacks a 5:5:5 packed base color. With `scaled` set, components are
/// extended to 8 bits by replicating their top bits into the low bits.
pub fn unpack_color5(packed_color5: u16, scaled: bool, alpha: u8) -> Color32 {
    let mut b = (packed_color5 & 31) as u8;
    let mut g = ((packed_color5 >> 5) & 31) as u8;
    let mut r = ((packed_color5 >> 10) & 31) as u8;

    if scaled {
        b = (b << 3) | (b >> 2);
        g = (g << 3) | (g >> 2);
        r = (r << 3) | (r >> 2);
    }

    Color32::new(r, g, b, alpha)
}

/// Returns the four candidate colors of an ETC1 diff subblock: the scaled
/// base color offset by each modifier of the chosen intensity table, clamped
/// to the 8-bit range.
pub fn get_diff_subblock_colors(packed_color5: u16, inten_table_idx: usize) -> [Color32; 4] {
    assert!(inten_table_idx < ETC1_MODIFIERS.len());

    let base = unpack_color5(packed_color5, true, 255);
    let (r, g, b) = (base[0] as i32, base[1] as i32, base[2] as i32);

    let mut colors = [Color32::default(); 4];
    for (color, &modifier) in colors.iter_mut().zip(ETC1_MODIFIERS[inten_table_idx].iter()) {
        let y = modifier as i32;
        *color = Color32::new(clamp255(r + y), clamp255(g + y), clamp255(b + y), 255);
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_color5() {
        let gray = Color32::new(16, 16, 16, 255);
        let packed = pack_color5(gray, false, 127);
        assert_eq!(packed, 16 | (16 << 5) | (16 << 10));
        assert_eq!(unpack_color5(packed, false, 255), gray);

        // Scaled unpack replicates the top 3 bits into the low bits
        assert_eq!(
            unpack_color5(packed, true, 255),
            Color32::new(132, 132, 132, 255)
        );
        let white = pack_color5(Color32::new(255, 255, 255, 255), true, 127);
        assert_eq!(unpack_color5(white, true, 255), Color32::new(255, 255, 255, 255));
    }

    #[test]
    fn test_diff_subblock_colors() {
        // Base 16 extends to 132, intensity table 0 offsets it by -8, -2, 2, 8
        let packed = pack_color5(Color32::new(16, 16, 16, 255), false, 127);
        let colors = get_diff_subblock_colors(packed, 0);
        assert_eq!(colors[0], Color32::new(124, 124, 124, 255));
        assert_eq!(colors[1], Color32::new(130, 130, 130, 255));
        assert_eq!(colors[2], Color32::new(134, 134, 134, 255));
        assert_eq!(colors[3], Color32::new(140, 140, 140, 255));
    }

    #[test]
    fn test_diff_subblock_colors_clamped() {
        // Base 0 with the strongest table clamps the low selectors to zero
        let packed = pack_color5(Color32::new(0, 0, 0, 255), false, 127);
        let colors = get_diff_subblock_colors(packed, 7);
        assert_eq!(colors[0], Color32::new(0, 0, 0, 255));
        assert_eq!(colors[1], Color32::new(0, 0, 0, 255));
        assert_eq!(colors[2], Color32::new(47, 47, 47, 255));
        assert_eq!(colors[3], Color32::new(183, 183, 183, 255));

        // Base 31 extends to 255 and clamps the high selectors
        let packed = pack_color5(Color32::new(31, 31, 31, 255), false, 127);
        let colors = get_diff_subblock_colors(packed, 7);
        assert_eq!(colors[0], Color32::new(72, 72, 72, 255));
        assert_eq!(colors[3], Color32::new(255, 255, 255, 255));
    }
}
