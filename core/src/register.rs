use std::ops::{Index, IndexMut};

use crate::constants::{FLAG_REGISTER, REGISTER_COUNT};

/// # Register
/// One of V0..VF. Every write is masked to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    id: u8,
    value: u8,
}

impl Register {
    pub fn new(id: u8) -> Self {
        Register {
            id: id & 0xF,
            value: 0,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn get(&self) -> u8 {
        self.value
    }

    /// Stores the low byte of `value`.
    pub fn set(&mut self, value: u16) {
        self.value = (value & 0xFF) as u8;
    }

    pub fn equals_value(&self, value: u16) -> bool {
        self.value == (value & 0xFF) as u8
    }

    /// Compares values only; the ids may differ.
    pub fn equals_register(&self, other: &Register) -> bool {
        self.value == other.value
    }
}

/// # Register bank
/// The 16 general registers.
///
/// VF doubles as the carry/borrow/collision flag, but only by convention of
/// the instructions that write it; the bank treats it like any other register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterBank {
    registers: [Register; REGISTER_COUNT],
}

impl RegisterBank {
    pub fn new() -> Self {
        let mut registers = [Register::new(0); REGISTER_COUNT];
        for (id, register) in registers.iter_mut().enumerate() {
            *register = Register::new(id as u8);
        }
        RegisterBank { registers }
    }

    /// Value of Vx
    pub fn get(&self, x: u8) -> u8 {
        self[x].get()
    }

    /// Vx = value & 0xFF
    pub fn set(&mut self, x: u8, value: u16) {
        self[x].set(value);
    }

    pub fn flag(&self) -> u8 {
        self.get(FLAG_REGISTER)
    }

    pub fn set_flag(&mut self, set: bool) {
        self.set(FLAG_REGISTER, u16::from(set));
    }

    pub fn values(&self) -> [u8; REGISTER_COUNT] {
        let mut values = [0; REGISTER_COUNT];
        for (value, register) in values.iter_mut().zip(self.registers.iter()) {
            *value = register.get();
        }
        values
    }

    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter()
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for RegisterBank {
    type Output = Register;

    fn index(&self, x: u8) -> &Register {
        &self.registers[(x & 0xF) as usize]
    }
}

impl IndexMut<u8> for RegisterBank {
    fn index_mut(&mut self, x: u8) -> &mut Register {
        &mut self.registers[(x & 0xF) as usize]
    }
}
