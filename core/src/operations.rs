use log::debug;
use rand::Rng;

use crate::constants::ADDRESS_MASK;
use crate::cpu::{Cpu, RunState};
use crate::memory::Memory;
use crate::opcode::Opcode;

/// What an operation wants done with the program counter once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// pc += 2
    Next,
    /// pc += 4, stepping over the following instruction
    Skip,
    /// pc = addr
    Jump(u16),
    /// pc is left as is
    Stay,
}

impl Flow {
    fn skip_if(condition: bool) -> Flow {
        if condition {
            Flow::Skip
        } else {
            Flow::Next
        }
    }
}

/// clear
pub fn cls(_op: u16, cpu: &mut Cpu) -> Flow {
    cpu.frame.clear();
    cpu.frame_updated = true;
    Flow::Next
}

/// PC = STACK.pop()
/// With nothing to return to the PC stays put.
pub fn ret(_op: u16, cpu: &mut Cpu) -> Flow {
    match cpu.stack.pop() {
        Some(addr) => Flow::Jump(addr),
        None => {
            debug!("return with an empty call stack at {:#05X}", cpu.pc);
            Flow::Stay
        }
    }
}

/// PC = addr
pub fn jump(op: u16, _cpu: &mut Cpu) -> Flow {
    Flow::Jump(op.nnn())
}

/// STACK.push(PC + 2); PC = addr
pub fn call(op: u16, cpu: &mut Cpu) -> Flow {
    cpu.stack.push(cpu.pc.wrapping_add(2));
    Flow::Jump(op.nnn())
}

/// if Vx == nn then pc += 2
pub fn ske(op: u16, cpu: &mut Cpu) -> Flow {
    Flow::skip_if(cpu.registers[op.x()].equals_value(op.nn().into()))
}

/// if Vx != nn then pc += 2
pub fn skne(op: u16, cpu: &mut Cpu) -> Flow {
    Flow::skip_if(!cpu.registers[op.x()].equals_value(op.nn().into()))
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, cpu: &mut Cpu) -> Flow {
    let vy = cpu.registers[op.y()];
    Flow::skip_if(cpu.registers[op.x()].equals_register(&vy))
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, cpu: &mut Cpu) -> Flow {
    let vy = cpu.registers[op.y()];
    Flow::skip_if(!cpu.registers[op.x()].equals_register(&vy))
}

/// Vx = nn
pub fn load(op: u16, cpu: &mut Cpu) -> Flow {
    cpu.registers.set(op.x(), op.nn().into());
    Flow::Next
}

/// Vx += nn
/// Overflow is dropped and VF is left alone.
pub fn add(op: u16, cpu: &mut Cpu) -> Flow {
    let sum = cpu.registers.get(op.x()).wrapping_add(op.nn());
    cpu.registers.set(op.x(), sum.into());
    Flow::Next
}

/// Vx = Vy
pub fn mv(op: u16, cpu: &mut Cpu) -> Flow {
    let vy = cpu.registers.get(op.y());
    cpu.registers.set(op.x(), vy.into());
    Flow::Next
}

/// Vx |= Vy
pub fn or(op: u16, cpu: &mut Cpu) -> Flow {
    let res = cpu.registers.get(op.x()) | cpu.registers.get(op.y());
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

/// Vx &= Vy
pub fn and(op: u16, cpu: &mut Cpu) -> Flow {
    let res = cpu.registers.get(op.x()) & cpu.registers.get(op.y());
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

/// Vx ^= Vy
pub fn xor(op: u16, cpu: &mut Cpu) -> Flow {
    let res = cpu.registers.get(op.x()) ^ cpu.registers.get(op.y());
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

// The ALU operations below write VF before Vx, so with X = F the result wins.

/// Vx += Vy; VF = carry
pub fn addr(op: u16, cpu: &mut Cpu) -> Flow {
    let (res, carry) = cpu
        .registers
        .get(op.x())
        .overflowing_add(cpu.registers.get(op.y()));
    cpu.registers.set_flag(carry);
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: u16, cpu: &mut Cpu) -> Flow {
    let (res, borrow) = cpu
        .registers
        .get(op.x())
        .overflowing_sub(cpu.registers.get(op.y()));
    cpu.registers.set_flag(!borrow);
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: u16, cpu: &mut Cpu) -> Flow {
    let vx = cpu.registers.get(op.x());
    cpu.registers.set_flag(vx & 0x1 == 0x1);
    cpu.registers.set(op.x(), (vx >> 1).into());
    Flow::Next
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: u16, cpu: &mut Cpu) -> Flow {
    let (res, borrow) = cpu
        .registers
        .get(op.y())
        .overflowing_sub(cpu.registers.get(op.x()));
    cpu.registers.set_flag(!borrow);
    cpu.registers.set(op.x(), res.into());
    Flow::Next
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(op: u16, cpu: &mut Cpu) -> Flow {
    let vx = cpu.registers.get(op.x());
    cpu.registers.set_flag(vx & 0x80 == 0x80);
    cpu.registers.set(op.x(), (vx << 1).into());
    Flow::Next
}

/// I = addr
pub fn loadi(op: u16, cpu: &mut Cpu) -> Flow {
    cpu.index = op.nnn();
    Flow::Next
}

/// PC = V0 + addr
pub fn jumpi(op: u16, cpu: &mut Cpu) -> Flow {
    Flow::Jump((u16::from(cpu.registers.get(0x0)) + op.nnn()) & ADDRESS_MASK)
}

/// Vx = rand_byte & nn
pub fn rand(op: u16, cpu: &mut Cpu) -> Flow {
    let rand_byte: u8 = cpu.rng.gen();
    cpu.registers.set(op.x(), (rand_byte & op.nn()).into());
    Flow::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at memory I..I+n onto the frame at Vx, Vy.
/// Pixels that fall off the frame are dropped. VF = whether any pixel was erased.
pub fn draw(op: u16, cpu: &mut Cpu) -> Flow {
    let sprite = cpu.memory.get_sprite(cpu.index, op.n());
    let x = usize::from(cpu.registers.get(op.x()));
    let y = usize::from(cpu.registers.get(op.y()));
    let collision = cpu.frame.draw_sprite(&sprite, x, y);
    cpu.registers.set_flag(collision);
    cpu.frame_updated = true;
    Flow::Next
}

/// if key[Vx] is down then pc += 2
pub fn skpr(op: u16, cpu: &mut Cpu) -> Flow {
    Flow::skip_if(cpu.keys.is_down(cpu.registers.get(op.x())))
}

/// if key[Vx] is up then pc += 2
pub fn skup(op: u16, cpu: &mut Cpu) -> Flow {
    Flow::skip_if(!cpu.keys.is_down(cpu.registers.get(op.x())))
}

/// Vx = DT
pub fn moved(op: u16, cpu: &mut Cpu) -> Flow {
    let ticks = cpu.delay_timer.ticks();
    cpu.registers.set(op.x(), ticks.into());
    Flow::Next
}

/// await keypress for Vx
/// The instruction is not retired until the CPU sees a key down.
pub fn keyd(op: u16, cpu: &mut Cpu) -> Flow {
    cpu.keys.clear_states();
    cpu.state = RunState::BlockedForInput { register: op.x() };
    debug!("blocked for input into V{:X} at {:#05X}", op.x(), cpu.pc);
    Flow::Stay
}

/// DT = Vx
pub fn loadd(op: u16, cpu: &mut Cpu) -> Flow {
    let vx = cpu.registers.get(op.x());
    cpu.delay_timer.set_ticks(vx);
    Flow::Next
}

/// ST = Vx
pub fn loads(op: u16, cpu: &mut Cpu) -> Flow {
    let vx = cpu.registers.get(op.x());
    cpu.set_sound_timer(vx);
    Flow::Next
}

/// I += Vx; VF = whether I ran past the end of memory
pub fn addi(op: u16, cpu: &mut Cpu) -> Flow {
    let sum = cpu.index + u16::from(cpu.registers.get(op.x()));
    cpu.registers.set_flag(sum > ADDRESS_MASK);
    cpu.index = sum & ADDRESS_MASK;
    Flow::Next
}

/// I = address of the font glyph for Vx
pub fn ldspr(op: u16, cpu: &mut Cpu) -> Flow {
    cpu.index = Memory::font_address(cpu.registers.get(op.x()));
    Flow::Next
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: u16, cpu: &mut Cpu) -> Flow {
    let vx = cpu.registers.get(op.x());
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0u16..).zip(digits.iter()) {
        cpu.memory
            .poke_byte((*digit).into(), cpu.index.wrapping_add(offset));
    }
    Flow::Next
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, cpu: &mut Cpu) -> Flow {
    for r in 0..=op.x() {
        let value = cpu.registers.get(r);
        cpu.memory
            .poke_byte(value.into(), cpu.index.wrapping_add(r.into()));
    }
    Flow::Next
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, cpu: &mut Cpu) -> Flow {
    for r in 0..=op.x() {
        let value = cpu.memory.peek_byte(cpu.index.wrapping_add(r.into()));
        cpu.registers.set(r, value.into());
    }
    Flow::Next
}
