pub use constants::{CLOCK_SPEED, TIMER_FREQUENCY};
pub use cpu::{Cpu, RunState};
pub use error::{Error, Result};
pub use frame::{Frame, Pixel};
pub use keys::{Key, KeyState};
pub use memory::Memory;
pub use program::Program;
pub use register::{Register, RegisterBank};
pub use scheduler::{Scheduler, Ticks, MAX_CATCH_UP};
pub use sprite::Sprite;
pub use stack::CallStack;
pub use timer::{AudioSignal, Buzzer, Mute, Timer, TimerKind};

pub mod constants;
mod cpu;
mod error;
mod frame;
mod instruction;
mod keys;
mod memory;
mod opcode;
mod operations;
mod program;
mod register;
mod scheduler;
mod sprite;
mod stack;
mod timer;
