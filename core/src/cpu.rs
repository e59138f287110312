use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{ADDRESS_MASK, PROGRAM_START};
use crate::error::Result;
use crate::frame::Frame;
use crate::instruction::from_op;
use crate::keys::KeyState;
use crate::memory::Memory;
use crate::operations::Flow;
use crate::program::Program;
use crate::register::RegisterBank;
use crate::stack::CallStack;
use crate::timer::{AudioSignal, Buzzer, Mute, Timer};

/// Whether the CPU is retiring instructions or waiting on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// An FX0A is pending; the first key seen down is written to V`register`.
    BlockedForInput { register: u8 },
}

/// # CPU
/// Owns every piece of machine state and runs the fetch-decode-execute cycle.
///
/// The CPU keeps no time. Whoever drives it calls:
/// - `step` once per CPU cycle
/// - `tick_timers` once per timer period (60Hz)
/// - `key_press`/`key_release` as host input arrives
/// - `take_frame` to find out whether there is anything new to render
pub struct Cpu {
    pub(crate) registers: RegisterBank,
    pub(crate) pc: u16,
    pub(crate) index: u16,
    pub(crate) memory: Memory,
    pub(crate) stack: CallStack,
    pub(crate) frame: Frame,
    pub(crate) frame_updated: bool,
    pub(crate) keys: KeyState,
    pub(crate) delay_timer: Timer,
    pub(crate) sound_timer: Timer,
    pub(crate) state: RunState,
    pub(crate) rng: Box<dyn RngCore>,
    buzzer: Box<dyn Buzzer>,
    program: Program,
}

impl Cpu {
    /// Builds a CPU with `program` loaded at 0x200 and a silent buzzer.
    pub fn new(program: Program) -> Result<Self> {
        Cpu::with_buzzer(program, Box::new(Mute::new()))
    }

    /// Builds a CPU whose sound timer drives `buzzer`.
    pub fn with_buzzer(program: Program, buzzer: Box<dyn Buzzer>) -> Result<Self> {
        let mut memory = Memory::new();
        memory.load_program(&program)?;
        debug!("loaded {:?} ({} bytes)", program.name(), program.len());
        Ok(Cpu {
            registers: RegisterBank::new(),
            pc: PROGRAM_START,
            index: 0,
            memory,
            stack: CallStack::new(),
            frame: Frame::new(),
            frame_updated: false,
            keys: KeyState::new(),
            delay_timer: Timer::delay(),
            sound_timer: Timer::sound(),
            state: RunState::Running,
            rng: Box::new(StdRng::from_entropy()),
            buzzer,
            program,
        })
    }

    /// Replaces the source of CXNN's random bytes.
    pub fn with_rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Runs a single CPU cycle.
    /// - while blocked for input, checks the keypad and otherwise does nothing
    /// - while running, fetches the word at PC and executes it
    pub fn step(&mut self) {
        match self.state {
            RunState::BlockedForInput { register } => self.await_key(register),
            RunState::Running => {
                let op = self.memory.peek_word(self.pc);
                trace!(
                    "{:04X} v{:02X?} i{:04X} pc{:04X}",
                    op,
                    self.registers.values(),
                    self.index,
                    self.pc
                );
                let flow = match from_op(op) {
                    Some(operation) => operation(op, self),
                    None => {
                        warn!("unknown opcode {:#06X}", op);
                        Flow::Next
                    }
                };
                self.commit(flow);
            }
        }
    }

    fn commit(&mut self, flow: Flow) {
        self.pc = match flow {
            Flow::Next => self.pc.wrapping_add(2),
            Flow::Skip => self.pc.wrapping_add(4),
            Flow::Jump(addr) => addr,
            Flow::Stay => self.pc,
        } & ADDRESS_MASK;
    }

    /// Finishes a pending FX0A once a key is down.
    fn await_key(&mut self, register: u8) {
        if let Some(code) = self.keys.highest_down() {
            self.registers.set(register, code.into());
            self.state = RunState::Running;
            debug!("key {:X} into V{:X}, resuming", code, register);
            self.commit(Flow::Next);
        }
    }

    /// Decrements both timers by one period.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        let signal = self.sound_timer.tick();
        self.signal_buzzer(signal);
    }

    pub(crate) fn set_sound_timer(&mut self, ticks: u8) {
        let signal = self.sound_timer.set_ticks(ticks);
        self.signal_buzzer(signal);
    }

    fn signal_buzzer(&mut self, signal: Option<AudioSignal>) {
        match signal {
            Some(AudioSignal::Start) => self.buzzer.start(),
            Some(AudioSignal::Stop) => self.buzzer.stop(),
            None => {}
        }
    }

    /// Returns the frame if it changed since the last call.
    pub fn take_frame(&mut self) -> Option<&Frame> {
        if std::mem::replace(&mut self.frame_updated, false) {
            Some(&self.frame)
        } else {
            None
        }
    }

    pub fn key_press(&mut self, code: u8) {
        self.keys.press(code);
    }

    pub fn key_release(&mut self, code: u8) {
        self.keys.release(code);
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn stack(&self) -> &CallStack {
        &self.stack
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn delay_timer(&self) -> &Timer {
        &self.delay_timer
    }

    pub fn sound_timer(&self) -> &Timer {
        &self.sound_timer
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}

/// A CPU running `code` with a fixed random seed.
/// An empty `code` gets a single CLS so the program is loadable.
#[cfg(test)]
pub(crate) fn test_cpu(code: &[u8]) -> Cpu {
    let code = if code.is_empty() { vec![0x00, 0xE0] } else { code.to_vec() };
    let program = Program::from_bytes("test", code).expect("test program should build");
    Cpu::new(program)
        .expect("test program should load")
        .with_rng(StdRng::seed_from_u64(0xC8))
}
