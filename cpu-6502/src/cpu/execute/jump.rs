use crate::bus::Bus;
use crate::constants::InterruptVectors;

use super::super::addressing::{address_of, Operand};
use super::super::state::{Cpu6502, StatusFlag};

/// Shared by the eight conditional branches: if `taken`, jump to the
/// resolved (Relative-mode) address and earn one cycle, plus a second if
/// the jump crosses a page boundary.
pub fn branch(cpu: &mut Cpu6502, operand: Operand, taken: bool) -> u8 {
    if !taken {
        return 0;
    }

    let target = address_of(&operand);
    // Page-cross is judged against the branch opcode's own starting address,
    // not the post-fetch PC: a branch at the end of a page that jumps back
    // into the same page it started on still straddled a page boundary.
    let base_address = cpu.pc.wrapping_sub(2);
    let page_crossed = (base_address & 0xFF00) != (target & 0xFF00);
    cpu.pc = target;

    if page_crossed {
        2
    } else {
        1
    }
}

pub fn brk(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    cpu.push_u16(bus, cpu.pc);
    let status = cpu.p | 0b0011_0000;
    cpu.push_u8(bus, status);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = bus.read_u16(InterruptVectors::IrqBrkVector as u16);
    0
}

pub fn rti(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    let status = cpu.pop_u8(bus);
    cpu.p = (status | 0b0010_0000) & !0b0001_0000;
    cpu.pc = cpu.pop_u16(bus);
    0
}

pub fn jsr(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let target = address_of(&operand);
    cpu.push_u16(bus, cpu.pc.wrapping_sub(1));
    cpu.pc = target;
    0
}

pub fn rts(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    cpu.pc = cpu.pop_u16(bus).wrapping_add(1);
    0
}

pub fn jmp(cpu: &mut Cpu6502, operand: Operand) -> u8 {
    cpu.pc = address_of(&operand);
    0
}

pub fn clc(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::Carry, false);
    0
}

pub fn sec(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::Carry, true);
    0
}

pub fn cld(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::Decimal, false);
    0
}

pub fn sed(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::Decimal, true);
    0
}

pub fn cli(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
    0
}

pub fn sei(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    0
}

pub fn clv(cpu: &mut Cpu6502) -> u8 {
    cpu.set_flag(StatusFlag::Overflow, false);
    0
}
