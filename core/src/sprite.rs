use crate::constants::SPRITE_WIDTH;

/// # Sprite
/// A read-only run of sprite rows, one byte per row.
///
/// Bit 7 of each row is the leftmost pixel, so `(x, y)` reads bit `7 - x` of
/// row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<u8>,
}

impl Sprite {
    pub fn new(rows: Vec<u8>) -> Self {
        Sprite { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        SPRITE_WIDTH
    }

    /// Whether the pixel at column `x` of row `y` is set.
    /// Anything outside the sprite is unset.
    pub fn is_set_at(&self, x: usize, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) if x < SPRITE_WIDTH => row & (0x80 >> x) != 0,
            _ => false,
        }
    }
}
