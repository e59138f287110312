/// Number of addressable bytes; every address is masked to fit.
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every memory address and to the index register.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where ROMs are loaded into memory and where the program counter starts.
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// 0x050 - 0x0A0 is reserved for the built-in hexadecimal font.
pub const FONT_START: u16 = 0x050;

/// Height in bytes (rows) of each font glyph.
pub const FONT_GLYPH_HEIGHT: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always 8 pixels wide; one byte per row.
pub const SPRITE_WIDTH: usize = 8;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Index of VF, the carry/borrow/collision flag.
pub const FLAG_REGISTER: u8 = 0xF;

/// The CPU should have a clock speed of 500Hz
pub const CLOCK_SPEED: u32 = 500;

/// The timers should be decremented at 60Hz
pub const TIMER_FREQUENCY: u32 = 60;

/// # Sprite sheet
/// Glyphs for the hexadecimal digits 0..F, 5 bytes each, 4 pixels wide.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
