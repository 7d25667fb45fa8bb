mod jump;
mod logical;
mod move_ops;

use crate::bus::Bus;

use super::addressing::Operand;
use super::decode::Operation;
use super::state::{Cpu6502, StatusFlag};

/// Run one decoded operation against `cpu`/`bus`. Returns any cycles earned
/// beyond the opcode's base cost (branches taken, page crossings on taken
/// branches); every other operation returns 0 here since their page-cross
/// penalty was already folded in by the addressing-mode resolver.
pub fn dispatch(cpu: &mut Cpu6502, bus: &mut dyn Bus, operation: Operation, operand: Operand) -> u8 {
    use Operation::*;

    match operation {
        LDA => move_ops::lda(cpu, bus, operand),
        STA => move_ops::sta(cpu, bus, operand),
        LDX => move_ops::ldx(cpu, bus, operand),
        STX => move_ops::stx(cpu, bus, operand),
        LDY => move_ops::ldy(cpu, bus, operand),
        STY => move_ops::sty(cpu, bus, operand),
        TAX => move_ops::tax(cpu),
        TXA => move_ops::txa(cpu),
        TAY => move_ops::tay(cpu),
        TYA => move_ops::tya(cpu),
        TSX => move_ops::tsx(cpu),
        TXS => move_ops::txs(cpu),
        PLA => move_ops::pla(cpu, bus),
        PHA => move_ops::pha(cpu, bus),
        PLP => move_ops::plp(cpu, bus),
        PHP => move_ops::php(cpu, bus),

        ORA => logical::ora(cpu, bus, operand),
        AND => logical::and(cpu, bus, operand),
        EOR => logical::eor(cpu, bus, operand),
        ADC => logical::adc(cpu, bus, operand),
        SBC => logical::sbc(cpu, bus, operand),
        CMP => logical::cmp(cpu, bus, operand),
        CPX => logical::cpx(cpu, bus, operand),
        CPY => logical::cpy(cpu, bus, operand),
        DEC => logical::dec(cpu, bus, operand),
        DEX => logical::dex(cpu),
        DEY => logical::dey(cpu),
        INC => logical::inc(cpu, bus, operand),
        INX => logical::inx(cpu),
        INY => logical::iny(cpu),
        ASL => logical::asl(cpu, bus, operand),
        ROL => logical::rol(cpu, bus, operand),
        LSR => logical::lsr(cpu, bus, operand),
        ROR => logical::ror(cpu, bus, operand),
        BIT => logical::bit(cpu, bus, operand),

        BPL => jump::branch(cpu, operand, !cpu.flag(StatusFlag::Negative)),
        BMI => jump::branch(cpu, operand, cpu.flag(StatusFlag::Negative)),
        BVC => jump::branch(cpu, operand, !cpu.flag(StatusFlag::Overflow)),
        BVS => jump::branch(cpu, operand, cpu.flag(StatusFlag::Overflow)),
        BCC => jump::branch(cpu, operand, !cpu.flag(StatusFlag::Carry)),
        BCS => jump::branch(cpu, operand, cpu.flag(StatusFlag::Carry)),
        BNE => jump::branch(cpu, operand, !cpu.flag(StatusFlag::Zero)),
        BEQ => jump::branch(cpu, operand, cpu.flag(StatusFlag::Zero)),

        BRK => jump::brk(cpu, bus),
        RTI => jump::rti(cpu, bus),
        JSR => jump::jsr(cpu, bus, operand),
        RTS => jump::rts(cpu, bus),
        JMP => jump::jmp(cpu, operand),

        CLC => jump::clc(cpu),
        SEC => jump::sec(cpu),
        CLD => jump::cld(cpu),
        SED => jump::sed(cpu),
        CLI => jump::cli(cpu),
        SEI => jump::sei(cpu),
        CLV => jump::clv(cpu),
        NOP => 0,

        Undefined => unreachable!("undefined opcodes halt before dispatch"),
    }
}
