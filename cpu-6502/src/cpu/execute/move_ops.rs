use crate::bus::Bus;

use super::super::addressing::{address_of, read_operand, Operand};
use super::super::state::Cpu6502;

pub fn lda(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.a = read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn sta(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    bus.write_u8(address_of(&operand), cpu.a);
    0
}

pub fn ldx(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.x = read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.x);
    0
}

pub fn stx(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    bus.write_u8(address_of(&operand), cpu.x);
    0
}

pub fn ldy(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.y = read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.y);
    0
}

pub fn sty(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    bus.write_u8(address_of(&operand), cpu.y);
    0
}

pub fn tax(cpu: &mut Cpu6502) -> u8 {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
    0
}

pub fn txa(cpu: &mut Cpu6502) -> u8 {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn tay(cpu: &mut Cpu6502) -> u8 {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
    0
}

pub fn tya(cpu: &mut Cpu6502) -> u8 {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn tsx(cpu: &mut Cpu6502) -> u8 {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Unlike every other transfer instruction, TXS does not touch N or Z.
pub fn txs(cpu: &mut Cpu6502) -> u8 {
    cpu.s = cpu.x;
    0
}

pub fn pla(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    cpu.a = cpu.pop_u8(bus);
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn pha(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    cpu.push_u8(bus, cpu.a);
    0
}

/// Pulling status forces the reserved bit on and the break bit off: those
/// two bits only exist in the byte that's pushed to the stack, not in the
/// live status register.
pub fn plp(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    let value = cpu.pop_u8(bus);
    cpu.p = (value | 0b0010_0000) & !0b0001_0000;
    0
}

/// PHP always pushes the status byte with both the break and reserved bits
/// set, regardless of their live value.
pub fn php(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u8 {
    let value = cpu.p | 0b0011_0000;
    cpu.push_u8(bus, value);
    0
}
