use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::sprite::Sprite;

/// The on/off state of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    On,
    #[default]
    Off,
}

/// # Frame
/// The 64x32 monochrome framebuffer, indexed as `[y][x]`.
///
/// Coordinates outside the grid read as `Off` and cannot be toggled; sprites
/// drawn across an edge are clipped, not wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [[Pixel; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            pixels: [[Pixel::Off; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    pub fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    pub fn value_at(&self, x: usize, y: usize) -> Pixel {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Pixel::Off)
    }

    /// Flips the pixel at `(x, y)`.
    ///
    /// Returns `true` only if the pixel was turned off, which is what sprite
    /// collision detection is built on. Off-grid coordinates return `false`.
    pub fn toggle_at(&mut self, x: usize, y: usize) -> bool {
        match self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(pixel) => {
                let was_on = *pixel == Pixel::On;
                *pixel = if was_on { Pixel::Off } else { Pixel::On };
                was_on
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[Pixel::Off; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs `sprite` onto the frame with its top-left corner at `(x, y)`.
    /// Returns whether any pixel was turned off.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: usize, y: usize) -> bool {
        let mut collision = false;
        for line in 0..sprite.height() {
            for col in 0..sprite.width() {
                if sprite.is_set_at(col, line) {
                    collision |= self.toggle_at(x + col, y + line);
                }
            }
        }
        collision
    }

    /// Rows of pixels from top to bottom, for presentation.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel; DISPLAY_WIDTH]> {
        self.pixels.iter()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
