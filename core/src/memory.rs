use crate::constants::{
    ADDRESS_MASK, FONT_GLYPH_HEIGHT, FONT_START, MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START,
    SPRITE_SHEET,
};
use crate::error::{Error, Result};
use crate::program::Program;
use crate::sprite::Sprite;

/// # Memory
/// 4096 bytes of flat addressable memory.
///
/// Layout
/// - 0x050..0x0A0 the hexadecimal font, written on construction
/// - 0x200..      the loaded program
///
/// Every address is masked to 12 bits before use so reads and writes wrap
/// around instead of going out of bounds. Nothing stops a program from
/// overwriting the font.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = Box::new([0; MEMORY_SIZE]);
        let font = FONT_START as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Copies a program into memory starting at `PROGRAM_START`.
    pub fn load_program(&mut self, program: &Program) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + program.len()].copy_from_slice(program.bytes());
        Ok(())
    }

    pub fn peek_byte(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    /// Stores the low 8 bits of `val` at `addr`.
    pub fn poke_byte(&mut self, val: u16, addr: u16) {
        self.bytes[(addr & ADDRESS_MASK) as usize] = (val & 0xFF) as u8;
    }

    /// Reads a big-endian word; the second byte wraps independently of the first.
    pub fn peek_word(&self, addr: u16) -> u16 {
        let msb = u16::from(self.peek_byte(addr));
        let lsb = u16::from(self.peek_byte(addr.wrapping_add(1)));
        msb << 8 | lsb
    }

    /// Stores the low 16 bits of `word` big-endian at `addr`.
    pub fn poke_word(&mut self, word: u32, addr: u16) {
        let word = (word & 0xFFFF) as u16;
        self.poke_byte(word >> 8, addr);
        self.poke_byte(word & 0xFF, addr.wrapping_add(1));
    }

    /// Reads `height` consecutive bytes starting at `addr` as a sprite.
    pub fn get_sprite(&self, addr: u16, height: u8) -> Sprite {
        let rows = (0..u16::from(height))
            .map(|row| self.peek_byte(addr.wrapping_add(row)))
            .collect();
        Sprite::new(rows)
    }

    /// Address of the font glyph for the low nibble of `digit`.
    pub fn font_address(digit: u8) -> u16 {
        FONT_START + u16::from(digit & 0xF) * FONT_GLYPH_HEIGHT
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
