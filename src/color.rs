use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Default, PartialEq)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn to_rgba_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl fmt::Debug for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl Index<usize> for Color32 {
    type Output = u8;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Color32 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

pub(crate) fn clamp255(v: i32) -> u8 {
    v.max(0).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp255() {
        assert_eq!(clamp255(-1), 0);
        assert_eq!(clamp255(0), 0);
        assert_eq!(clamp255(128), 128);
        assert_eq!(clamp255(255), 255);
        assert_eq!(clamp255(255 + 183), 255);
        assert_eq!(clamp255(-183), 0);
    }
}
