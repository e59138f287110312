use crate::constants::KEY_COUNT;

/// Whether a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// # Key state
/// The 16-key hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Codes are the key's hex value; anything above 0xF is masked to its low
/// nibble. Translating host keyboard events into codes is the host's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyState {
    keys: [Key; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        KeyState {
            keys: [Key::Up; KEY_COUNT],
        }
    }

    pub fn press(&mut self, code: u8) {
        self.keys[(code & 0xF) as usize] = Key::Down;
    }

    pub fn release(&mut self, code: u8) {
        self.keys[(code & 0xF) as usize] = Key::Up;
    }

    pub fn state_for_key(&self, code: u8) -> Key {
        self.keys[(code & 0xF) as usize]
    }

    pub fn is_down(&self, code: u8) -> bool {
        self.state_for_key(code) == Key::Down
    }

    pub fn reset_key(&mut self, code: u8) {
        self.release(code);
    }

    /// Releases every key.
    pub fn clear_states(&mut self) {
        self.keys = [Key::Up; KEY_COUNT];
    }

    pub fn any_down(&self) -> bool {
        self.keys.iter().any(|key| *key == Key::Down)
    }

    /// The largest code currently held, if any.
    pub fn highest_down(&self) -> Option<u8> {
        self.keys
            .iter()
            .rposition(|key| *key == Key::Down)
            .map(|code| code as u8)
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
