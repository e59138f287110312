use crate::cpu::Cpu;
use crate::opcode::Opcode;
use crate::operations::*;

/// An operation carries out one opcode against the CPU and says where the
/// program counter goes next.
pub type Operation = fn(op: u16, cpu: &mut Cpu) -> Flow;

/// Selects the Operation for a given opcode.
///
/// Dispatch is on the family first, then on whichever bits tell the members
/// of that family apart. Families 0x5 and 0x9 don't look at their last nibble.
/// Returns `None` for opcodes with no operation.
pub fn from_op(op: u16) -> Option<Operation> {
    let operation: Operation = match op.family() {
        0x0 => match op.n() {
            0x0 => cls,
            0xE => ret,
            _ => return None,
        },
        0x1 => jump,
        0x2 => call,
        0x3 => ske,
        0x4 => skne,
        0x5 => skre,
        0x6 => load,
        0x7 => add,
        0x8 => match op.n() {
            0x0 => mv,
            0x1 => or,
            0x2 => and,
            0x3 => xor,
            0x4 => addr,
            0x5 => sub,
            0x6 => shr,
            0x7 => subn,
            0xE => shl,
            _ => return None,
        },
        0x9 => skrne,
        0xA => loadi,
        0xB => jumpi,
        0xC => rand,
        0xD => draw,
        0xE => match op.nn() {
            0x9E => skpr,
            0xA1 => skup,
            _ => return None,
        },
        0xF => match op.nn() {
            0x07 => moved,
            0x0A => keyd,
            0x15 => loadd,
            0x18 => loads,
            0x1E => addi,
            0x29 => ldspr,
            0x33 => bcd,
            0x55 => stor,
            0x65 => read,
            _ => return None,
        },
        _ => return None,
    };
    Some(operation)
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use crate::cpu::{test_cpu, RunState};
    use crate::frame::Pixel;

    fn exec(cpu: &mut Cpu, op: u16) -> Flow {
        from_op(op).expect("opcode should decode")(op, cpu)
    }

    #[test]
    fn test_unknown_opcodes() {
        for op in [0x0001, 0x00E1, 0x8008, 0x800F, 0xE000, 0xE19F, 0xF000, 0xF1FF].iter() {
            assert!(from_op(*op).is_none(), "{:04X} should not decode", op);
        }
    }

    #[test]
    fn test_every_family_decodes() {
        let ops = [
            0x00E0, 0x00EE, 0x1000, 0x2000, 0x3000, 0x4000, 0x5000, 0x6000, 0x7000, 0x8000,
            0x9000, 0xA000, 0xB000, 0xC000, 0xD000, 0xE09E, 0xF007,
        ];
        for op in ops.iter() {
            assert!(from_op(*op).is_some(), "{:04X} should decode", op);
        }
    }

    #[test]
    fn test_00e0_cls() {
        let mut cpu = test_cpu(&[]);
        cpu.frame.toggle_at(0, 0);
        assert_eq!(exec(&mut cpu, 0x00E0), Flow::Next);
        assert_eq!(cpu.frame.value_at(0, 0), Pixel::Off);
        assert!(cpu.frame_updated);
    }

    #[test]
    fn test_00ee_ret() {
        let mut cpu = test_cpu(&[]);
        cpu.stack.push(0xABC);
        assert_eq!(exec(&mut cpu, 0x00EE), Flow::Jump(0xABC));
        assert!(cpu.stack.is_empty());
    }

    #[test]
    fn test_00ee_ret_empty_stack_stays() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x00EE), Flow::Stay);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x1ABC), Flow::Jump(0x0ABC));
    }

    #[test]
    fn test_2nnn_call() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x2123), Flow::Jump(0x0123));
        assert_eq!(cpu.stack.peek(), Some(0x0202));
    }

    #[test]
    fn test_3xnn_se_skips() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        assert_eq!(exec(&mut cpu, 0x3111), Flow::Skip);
    }

    #[test]
    fn test_3xnn_se_doesntskip() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x3111), Flow::Next);
    }

    #[test]
    fn test_4xnn_sne_skips() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x4111), Flow::Skip);
    }

    #[test]
    fn test_4xnn_sne_doesntskip() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        assert_eq!(exec(&mut cpu, 0x4111), Flow::Next);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        cpu.registers.set(0x2, 0x11);
        assert_eq!(exec(&mut cpu, 0x5120), Flow::Skip);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        assert_eq!(exec(&mut cpu, 0x5120), Flow::Next);
    }

    #[test]
    fn test_6xnn_ld() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0x6122), Flow::Next);
        assert_eq!(cpu.registers.get(0x1), 0x22);
    }

    #[test]
    fn test_7xnn_add() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x1);
        exec(&mut cpu, 0x7122);
        assert_eq!(cpu.registers.get(0x1), 0x23);
    }

    #[test]
    fn test_7xnn_add_wraps_without_flag() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xFF);
        exec(&mut cpu, 0x7102);
        assert_eq!(cpu.registers.get(0x1), 0x01);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x2, 0x1);
        exec(&mut cpu, 0x8120);
        assert_eq!(cpu.registers.get(0x1), 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x6);
        cpu.registers.set(0x2, 0x3);
        exec(&mut cpu, 0x8121);
        assert_eq!(cpu.registers.get(0x1), 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x6);
        cpu.registers.set(0x2, 0x3);
        exec(&mut cpu, 0x8122);
        assert_eq!(cpu.registers.get(0x1), 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x6);
        cpu.registers.set(0x2, 0x3);
        exec(&mut cpu, 0x8123);
        assert_eq!(cpu.registers.get(0x1), 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xEE);
        cpu.registers.set(0x2, 0x11);
        exec(&mut cpu, 0x8124);
        assert_eq!(cpu.registers.get(0x1), 0xFF);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xFF);
        cpu.registers.set(0x2, 0x01);
        exec(&mut cpu, 0x8124);
        assert_eq!(cpu.registers.get(0x1), 0x00);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x33);
        cpu.registers.set(0x2, 0x11);
        exec(&mut cpu, 0x8125);
        assert_eq!(cpu.registers.get(0x1), 0x22);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_equal_is_noborrow() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        cpu.registers.set(0x2, 0x11);
        exec(&mut cpu, 0x8125);
        assert_eq!(cpu.registers.get(0x1), 0x00);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x01);
        cpu.registers.set(0x2, 0x02);
        exec(&mut cpu, 0x8125);
        assert_eq!(cpu.registers.get(0x1), 0xFF);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x5);
        exec(&mut cpu, 0x8106);
        assert_eq!(cpu.registers.get(0x1), 0x2);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x4);
        exec(&mut cpu, 0x8106);
        assert_eq!(cpu.registers.get(0x1), 0x2);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        cpu.registers.set(0x2, 0x33);
        exec(&mut cpu, 0x8127);
        assert_eq!(cpu.registers.get(0x1), 0x22);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x12);
        cpu.registers.set(0x2, 0x11);
        exec(&mut cpu, 0x8127);
        assert_eq!(cpu.registers.get(0x1), 0xFF);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xFF);
        exec(&mut cpu, 0x810E);
        assert_eq!(cpu.registers.get(0x1), 0xFE);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x4);
        exec(&mut cpu, 0x810E);
        assert_eq!(cpu.registers.get(0x1), 0x8);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_8fy4_result_overwrites_flag() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0xF, 0xFF);
        cpu.registers.set(0x1, 0x03);
        exec(&mut cpu, 0x8F14);
        assert_eq!(cpu.registers.get(0xF), 0x02);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        assert_eq!(exec(&mut cpu, 0x9120), Flow::Skip);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x11);
        cpu.registers.set(0x2, 0x11);
        assert_eq!(exec(&mut cpu, 0x9120), Flow::Next);
    }

    #[test]
    fn test_annn_ld() {
        let mut cpu = test_cpu(&[]);
        exec(&mut cpu, 0xAABC);
        assert_eq!(cpu.index, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x0, 0x2);
        assert_eq!(exec(&mut cpu, 0xBABC), Flow::Jump(0xABE));
    }

    #[test]
    fn test_bnnn_jp_wraps() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x0, 0x10);
        assert_eq!(exec(&mut cpu, 0xBFF8), Flow::Jump(0x008));
    }

    #[test]
    fn test_cxnn_rnd_masks() {
        let mut cpu = test_cpu(&[]);
        for _ in 0..32 {
            exec(&mut cpu, 0xC10F);
            assert_eq!(cpu.registers.get(0x1) & 0xF0, 0x0);
        }
        exec(&mut cpu, 0xC100);
        assert_eq!(cpu.registers.get(0x1), 0x0);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x0, 0x1);
        cpu.index = 0x050;
        // Draw the 0x0 glyph with a 1x 1y offset
        exec(&mut cpu, 0xD005);
        let expected: [[u8; 4]; 5] = [
            [1, 1, 1, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 1, 1, 1],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, lit) in row.iter().enumerate() {
                let pixel = if *lit == 1 { Pixel::On } else { Pixel::Off };
                assert_eq!(cpu.frame.value_at(x + 1, y + 1), pixel, "at {:?}", (x + 1, y + 1));
            }
        }
        assert_eq!(cpu.registers.flag(), 0x0);
        assert!(cpu.frame_updated);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x050;
        cpu.frame.toggle_at(0, 0);
        exec(&mut cpu, 0xD001);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_dxyn_drw_clears_flag_without_collision() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x050;
        cpu.registers.set(0xF, 0x1);
        exec(&mut cpu, 0xD001);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_dxyn_drw_clips() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x050;
        cpu.registers.set(0x0, (DISPLAY_WIDTH - 2) as u16);
        cpu.registers.set(0x1, (DISPLAY_HEIGHT - 1) as u16);
        exec(&mut cpu, 0xD012);
        assert_eq!(cpu.frame.value_at(DISPLAY_WIDTH - 1, DISPLAY_HEIGHT - 1), Pixel::On);
        assert_eq!(cpu.frame.value_at(0, DISPLAY_HEIGHT - 1), Pixel::Off);
        assert_eq!(cpu.frame.value_at(DISPLAY_WIDTH - 2, 0), Pixel::Off);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut cpu = test_cpu(&[]);
        cpu.keys.press(0xE);
        cpu.registers.set(0x1, 0xE);
        assert_eq!(exec(&mut cpu, 0xE19E), Flow::Skip);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0xE19E), Flow::Next);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut cpu = test_cpu(&[]);
        assert_eq!(exec(&mut cpu, 0xE1A1), Flow::Skip);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut cpu = test_cpu(&[]);
        cpu.keys.press(0xE);
        cpu.registers.set(0x1, 0xE);
        assert_eq!(exec(&mut cpu, 0xE1A1), Flow::Next);
    }

    #[test]
    fn test_fx07_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.delay_timer.set_ticks(0xF);
        exec(&mut cpu, 0xF107);
        assert_eq!(cpu.registers.get(0x1), 0xF);
    }

    #[test]
    fn test_fx0a_ld_blocks() {
        let mut cpu = test_cpu(&[]);
        cpu.keys.press(0x3);
        assert_eq!(exec(&mut cpu, 0xF10A), Flow::Stay);
        assert_eq!(cpu.state, RunState::BlockedForInput { register: 0x1 });
        assert!(!cpu.keys.any_down());
    }

    #[test]
    fn test_fx15_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xF);
        exec(&mut cpu, 0xF115);
        assert_eq!(cpu.delay_timer.ticks(), 0xF);
        assert!(cpu.delay_timer.is_armed());
    }

    #[test]
    fn test_fx18_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0xF);
        exec(&mut cpu, 0xF118);
        assert_eq!(cpu.sound_timer.ticks(), 0xF);
        assert!(cpu.sound_timer.is_armed());
    }

    #[test]
    fn test_fx1e_add() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x1;
        cpu.registers.set(0x1, 0x1);
        exec(&mut cpu, 0xF11E);
        assert_eq!(cpu.index, 0x2);
        assert_eq!(cpu.registers.flag(), 0x0);
    }

    #[test]
    fn test_fx1e_add_overflow() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0xFFF;
        cpu.registers.set(0x1, 0x2);
        exec(&mut cpu, 0xF11E);
        assert_eq!(cpu.index, 0x001);
        assert_eq!(cpu.registers.flag(), 0x1);
    }

    #[test]
    fn test_fx29_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 0x2);
        exec(&mut cpu, 0xF129);
        assert_eq!(cpu.index, 0x05A);
    }

    #[test]
    fn test_fx33_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.registers.set(0x1, 155);
        cpu.index = 0x300;
        exec(&mut cpu, 0xF133);
        assert_eq!(cpu.memory.peek_byte(0x300), 1);
        assert_eq!(cpu.memory.peek_byte(0x301), 5);
        assert_eq!(cpu.memory.peek_byte(0x302), 5);
    }

    #[test]
    fn test_fx55_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x300;
        for r in 0..5u8 {
            cpu.registers.set(r, u16::from(r) + 1);
        }
        exec(&mut cpu, 0xF455);
        for r in 0..5u16 {
            assert_eq!(cpu.memory.peek_byte(0x300 + r), r as u8 + 1);
        }
        assert_eq!(cpu.memory.peek_byte(0x305), 0);
        assert_eq!(cpu.index, 0x300);
    }

    #[test]
    fn test_fx65_ld() {
        let mut cpu = test_cpu(&[]);
        cpu.index = 0x300;
        for r in 0..5u16 {
            cpu.memory.poke_byte(r + 1, 0x300 + r);
        }
        exec(&mut cpu, 0xF465);
        assert_eq!(&cpu.registers.values()[0x0..0x5], &[0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(cpu.index, 0x300);
    }
}
