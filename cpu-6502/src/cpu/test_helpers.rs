#![macro_use]

use crate::bus::{Bus, FlatBus};
use crate::mappers::SimpleProgram;

use super::state::{Cpu6502, StatusFlag, RESET_STATUS_FLAG};

pub const P: u8 = RESET_STATUS_FLAG;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const R: u8 = StatusFlag::Reserved as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// An opcode byte no documented instruction uses; appended to every test
/// program so the run loop halts on its own once the program is done,
/// without needing an explicit cycle count per test.
const HALT: u8 = 0xFF;

/// Load `program` behind a freestanding cartridge, reset, and run until the
/// halt byte is reached.
pub fn run_program(program: &[u8]) -> (Cpu6502, FlatBus) {
    let mut bytes = program.to_vec();
    bytes.push(HALT);

    let mut bus = FlatBus::with_mapper(Box::new(SimpleProgram::load(&bytes)));
    let mut cpu = Cpu6502::new();
    cpu.reset(&mut bus);
    cpu.run(&mut bus, 1_000_000);
    (cpu, bus)
}

pub fn assert_register_a(program: &[u8], value: u8, status: u8) {
    let (cpu, _bus) = run_program(program);
    if cpu.a != value {
        panic!(
            "\n{:?}\nExpected register A to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            program, value, value, cpu.a, cpu.a
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(program: &[u8], value: u8, status: u8) {
    let (cpu, _bus) = run_program(program);
    if cpu.x != value {
        panic!(
            "\n{:?}\nExpected register X to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            program, value, value, cpu.x, cpu.x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(program: &[u8], value: u8, status: u8) {
    let (cpu, _bus) = run_program(program);
    if cpu.y != value {
        panic!(
            "\n{:?}\nExpected register Y to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            program, value, value, cpu.y, cpu.y
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_status(cpu: &Cpu6502, value: u8) {
    if cpu.p != value {
        panic!(
            "\nExpected cpu status 0b{:08b} to match 0b{:08b} (xor 0b{:08b})",
            cpu.p,
            value,
            cpu.p ^ value
        );
    }
}

pub fn assert_memory(program: &[u8], address: u16, expected: u8) {
    let (_cpu, bus) = run_program(program);
    let actual = bus.read_u8(address);
    if actual != expected {
        panic!(
            "\n{:?}\nExpected address {:#x} to contain {:#x} ({:#b}) but it was {:#x} ({:#b})",
            program, address, expected, expected, actual, actual
        );
    }
}

#[macro_export]
macro_rules! register_a {
    ($name:ident, $a:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_a($program, $a, $p);
        }
    };
}

#[macro_export]
macro_rules! register_x {
    ($name:ident, $x:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_x($program, $x, $p);
        }
    };
}

#[macro_export]
macro_rules! register_y {
    ($name:ident, $y:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_y($program, $y, $p);
        }
    };
}

#[macro_export]
macro_rules! status {
    ($name:ident, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let (cpu, _bus) = run_program($program);
            assert_status(&cpu, $p);
        }
    };
}

#[macro_export]
macro_rules! memory {
    ($name:ident, [$addr:expr, $expected:expr], $program:expr) => {
        #[test]
        fn $name() {
            assert_memory($program, $addr, $expected);
        }
    };
}
