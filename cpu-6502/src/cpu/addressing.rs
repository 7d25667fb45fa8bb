use crate::bus::Bus;

use super::decode::Mode;
use super::state::Cpu6502;

/// Where an instruction's operand lives, once the addressing mode has been
/// resolved. `Accumulator` and `Implied` carry no memory address.
pub enum Operand {
    Accumulator,
    Implied,
    Address(u16),
}

/// Resolve the effective address for `mode`, consuming whatever operand
/// bytes follow the opcode and advancing `cpu.pc` past them. Returns the
/// operand location plus whether the addressing computation crossed a page
/// boundary (relevant only to modes the decode table marks as eligible for
/// the page-cross cycle penalty).
///
/// http://www.emulator101.com/6502-addressing-modes.html
pub fn resolve(cpu: &mut Cpu6502, bus: &mut dyn Bus, mode: Mode) -> (Operand, bool) {
    match mode {
        Mode::RegisterA => (Operand::Accumulator, false),
        Mode::Implied => (Operand::Implied, false),

        Mode::Immediate => {
            let address = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            (Operand::Address(address), false)
        }

        Mode::Absolute => {
            let address = cpu.next_u16(bus);
            (Operand::Address(address), false)
        }

        Mode::ZeroPage => {
            let address = cpu.next_u8(bus) as u16;
            (Operand::Address(address), false)
        }

        // 6502 bug: the pointer's low byte never carries into the high byte
        // fetch, so `JMP ($xxFF)` reads its high byte from `$xx00`, not
        // `$(xx+1)00`.
        Mode::Indirect => {
            let pointer = cpu.next_u16(bus);
            let low = bus.read_u8(pointer);
            let high_address = if pointer & 0x00FF == 0x00FF {
                pointer & 0xFF00
            } else {
                pointer.wrapping_add(1)
            };
            let high = bus.read_u8(high_address);
            (Operand::Address(u16::from_le_bytes([low, high])), false)
        }

        Mode::AbsoluteIndexedX => {
            let base = cpu.next_u16(bus);
            let address = base.wrapping_add(cpu.x as u16);
            (Operand::Address(address), crosses_page(base, address))
        }

        Mode::AbsoluteIndexedY => {
            let base = cpu.next_u16(bus);
            let address = base.wrapping_add(cpu.y as u16);
            (Operand::Address(address), crosses_page(base, address))
        }

        // Zero-page indexing wraps within the zero page; it never carries
        // out into page one.
        Mode::ZeroPageX => {
            let address = cpu.next_u8(bus).wrapping_add(cpu.x) as u16;
            (Operand::Address(address), false)
        }

        Mode::ZeroPageY => {
            let address = cpu.next_u8(bus).wrapping_add(cpu.y) as u16;
            (Operand::Address(address), false)
        }

        // (zp,X): the pointer itself, and its high byte, both wrap within
        // the zero page.
        Mode::IndirectX => {
            let base = cpu.next_u8(bus).wrapping_add(cpu.x);
            let low = bus.read_u8(base as u16);
            let high = bus.read_u8(base.wrapping_add(1) as u16);
            (Operand::Address(u16::from_le_bytes([low, high])), false)
        }

        // (zp),Y: only the pointer fetch wraps within the zero page; the
        // resulting base address is then indexed by Y across the full
        // 16-bit space.
        Mode::IndirectY => {
            let base_zp = cpu.next_u8(bus);
            let low = bus.read_u8(base_zp as u16);
            let high = bus.read_u8(base_zp.wrapping_add(1) as u16);
            let base = u16::from_le_bytes([low, high]);
            let address = base.wrapping_add(cpu.y as u16);
            (Operand::Address(address), crosses_page(base, address))
        }

        // Only used by branch instructions. The offset is relative to the
        // address of the instruction *following* the branch (i.e. after the
        // one-byte signed offset has been consumed). Page-cross is not
        // judged here: it depends on whether the branch is taken, so
        // `execute::jump::branch` computes it against the branch opcode's
        // own starting address once it knows the condition held.
        Mode::Relative => {
            let offset = cpu.next_u8(bus) as i8;
            let address = cpu.pc.wrapping_add(offset as u16);
            (Operand::Address(address), false)
        }
    }
}

fn crosses_page(base: u16, other: u16) -> bool {
    (base & 0xFF00) != (other & 0xFF00)
}

/// Read the operand's current value, whether it's the accumulator or a
/// memory byte.
pub(super) fn read_operand(cpu: &Cpu6502, bus: &dyn Bus, operand: &Operand) -> u8 {
    match operand {
        Operand::Accumulator => cpu.a,
        Operand::Address(address) => bus.read_u8(*address),
        Operand::Implied => unreachable!("operation does not read an operand"),
    }
}

/// Write back a read-modify-write result to the accumulator or to memory.
pub(super) fn write_operand(cpu: &mut Cpu6502, bus: &mut dyn Bus, operand: &Operand, value: u8) {
    match operand {
        Operand::Accumulator => cpu.a = value,
        Operand::Address(address) => bus.write_u8(*address, value),
        Operand::Implied => unreachable!("operation does not write an operand"),
    }
}

/// The address of a memory operand. Panics if called on `Accumulator`/`Implied`.
pub(super) fn address_of(operand: &Operand) -> u16 {
    match operand {
        Operand::Address(address) => *address,
        Operand::Accumulator | Operand::Implied => {
            unreachable!("operation does not address memory")
        }
    }
}
