use crate::bus::Bus;

use super::super::addressing::{address_of, read_operand, write_operand, Operand};
use super::super::state::{Cpu6502, StatusFlag};

pub fn ora(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.a |= read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn and(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.a &= read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.a);
    0
}

pub fn eor(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    cpu.a ^= read_operand(cpu, bus, &operand);
    cpu.update_zero_and_negative(cpu.a);
    0
}

fn add_with_carry(cpu: &mut Cpu6502, value: u8) {
    let sum = cpu.a as u16 + value as u16 + cpu.carry() as u16;
    let result = sum as u8;

    let overflow = (!(cpu.a ^ value) & (cpu.a ^ result)) & 0b1000_0000 != 0;

    cpu.set_flag(StatusFlag::Carry, sum > 0xFF);
    cpu.set_flag(StatusFlag::Overflow, overflow);
    cpu.a = result;
    cpu.update_zero_and_negative(cpu.a);
}

pub fn adc(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    add_with_carry(cpu, value);
    0
}

/// SBC is ADC with the operand's bits flipped: `A - M - (1 - C)` is exactly
/// `A + !M + C` in two's complement, so the same carry/overflow derivation
/// as ADC applies unchanged.
pub fn sbc(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    add_with_carry(cpu, !value);
    0
}

fn compare(cpu: &mut Cpu6502, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.set_flag(StatusFlag::Carry, register >= value);
    cpu.update_zero_and_negative(result);
}

pub fn cmp(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    compare(cpu, cpu.a, value);
    0
}

pub fn cpx(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    compare(cpu, cpu.x, value);
    0
}

pub fn cpy(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    compare(cpu, cpu.y, value);
    0
}

pub fn dec(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let address = address_of(&operand);
    let value = bus.read_u8(address).wrapping_sub(1);
    bus.write_u8(address, value);
    cpu.update_zero_and_negative(value);
    0
}

pub fn dex(cpu: &mut Cpu6502) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

pub fn dey(cpu: &mut Cpu6502) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}

pub fn inc(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let address = address_of(&operand);
    let value = bus.read_u8(address).wrapping_add(1);
    bus.write_u8(address, value);
    cpu.update_zero_and_negative(value);
    0
}

pub fn inx(cpu: &mut Cpu6502) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

pub fn iny(cpu: &mut Cpu6502) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}

pub fn asl(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    cpu.set_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = value << 1;
    write_operand(cpu, bus, &operand, result);
    cpu.update_zero_and_negative(result);
    0
}

pub fn lsr(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    cpu.set_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    let result = value >> 1;
    write_operand(cpu, bus, &operand, result);
    cpu.update_zero_and_negative(result);
    0
}

pub fn rol(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    let old_carry = cpu.carry();
    cpu.set_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = (value << 1) | old_carry;
    write_operand(cpu, bus, &operand, result);
    cpu.update_zero_and_negative(result);
    0
}

pub fn ror(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    let old_carry = cpu.carry();
    cpu.set_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    let result = (value >> 1) | (old_carry << 7);
    write_operand(cpu, bus, &operand, result);
    cpu.update_zero_and_negative(result);
    0
}

pub fn bit(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, &operand);
    cpu.set_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    cpu.set_flag(StatusFlag::Overflow, value & 0b0100_0000 != 0);
    cpu.set_flag(StatusFlag::Zero, cpu.a & value == 0);
    0
}
