/// One of the 13 addressing modes a 6502 instruction may use.
///
/// http://www.emulator101.com/6502-addressing-modes.html
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    RegisterA,
    Immediate,
    Implied,
    Relative,
    Absolute,
    ZeroPage,
    Indirect,
    AbsoluteIndexedX,
    AbsoluteIndexedY,
    ZeroPageX,
    ZeroPageY,
    IndirectX,
    IndirectY,
}

/// The 56 documented 6502 operations. Any opcode byte that does not map to
/// one of these is `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Operation {
    ORA,
    AND,
    EOR,
    ADC,
    SBC,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    INC,
    INX,
    INY,
    ASL,
    ROL,
    LSR,
    ROR,
    LDA,
    STA,
    LDX,
    STX,
    LDY,
    STY,
    TAX,
    TXA,
    TAY,
    TYA,
    TSX,
    TXS,
    PLA,
    PHA,
    PLP,
    PHP,
    BPL,
    BMI,
    BVC,
    BVS,
    BCC,
    BCS,
    BNE,
    BEQ,
    BRK,
    RTI,
    JSR,
    RTS,
    JMP,
    BIT,
    CLC,
    SEC,
    CLD,
    SED,
    CLI,
    SEI,
    CLV,
    NOP,
    Undefined,
}

/// The result of decoding one opcode byte: the operation, its addressing
/// mode, the base cycle count, and whether that instruction earns an extra
/// cycle when the addressing mode's effective-address computation crosses a
/// page boundary (branch-taken penalties are handled separately, since they
/// depend on the branch condition rather than only on the opcode).
#[derive(Debug, Clone, Copy)]
pub struct Decoded {
    pub operation: Operation,
    pub mode: Mode,
    pub cycles: u8,
    pub page_cross_penalty: bool,
}

const fn d(operation: Operation, mode: Mode, cycles: u8, page_cross_penalty: bool) -> Decoded {
    Decoded {
        operation,
        mode,
        cycles,
        page_cross_penalty,
    }
}

/// Decode a single opcode byte into its operation, addressing mode, and
/// timing. Grounded in the canonical NMOS-6502 opcode matrix
/// (http://www.6502.org/tutorials/6502opcodes.html); undocumented opcodes
/// are intentionally not modeled and fall through to `Operation::Undefined`.
pub const fn decode(opcode: u8) -> Decoded {
    use Mode::*;
    use Operation::*;

    match opcode {
        // LDA
        0xA9 => d(LDA, Immediate, 2, false),
        0xA5 => d(LDA, ZeroPage, 3, false),
        0xB5 => d(LDA, ZeroPageX, 4, false),
        0xAD => d(LDA, Absolute, 4, false),
        0xBD => d(LDA, AbsoluteIndexedX, 4, true),
        0xB9 => d(LDA, AbsoluteIndexedY, 4, true),
        0xA1 => d(LDA, IndirectX, 6, false),
        0xB1 => d(LDA, IndirectY, 5, true),

        // LDX
        0xA2 => d(LDX, Immediate, 2, false),
        0xA6 => d(LDX, ZeroPage, 3, false),
        0xB6 => d(LDX, ZeroPageY, 4, false),
        0xAE => d(LDX, Absolute, 4, false),
        0xBE => d(LDX, AbsoluteIndexedY, 4, true),

        // LDY
        0xA0 => d(LDY, Immediate, 2, false),
        0xA4 => d(LDY, ZeroPage, 3, false),
        0xB4 => d(LDY, ZeroPageX, 4, false),
        0xAC => d(LDY, Absolute, 4, false),
        0xBC => d(LDY, AbsoluteIndexedX, 4, true),

        // STA
        0x85 => d(STA, ZeroPage, 3, false),
        0x95 => d(STA, ZeroPageX, 4, false),
        0x8D => d(STA, Absolute, 4, false),
        0x9D => d(STA, AbsoluteIndexedX, 5, false),
        0x99 => d(STA, AbsoluteIndexedY, 5, false),
        0x81 => d(STA, IndirectX, 6, false),
        0x91 => d(STA, IndirectY, 6, false),

        // STX / STY
        0x86 => d(STX, ZeroPage, 3, false),
        0x96 => d(STX, ZeroPageY, 4, false),
        0x8E => d(STX, Absolute, 4, false),
        0x84 => d(STY, ZeroPage, 3, false),
        0x94 => d(STY, ZeroPageX, 4, false),
        0x8C => d(STY, Absolute, 4, false),

        // Register transfers
        0xAA => d(TAX, Implied, 2, false),
        0xA8 => d(TAY, Implied, 2, false),
        0x8A => d(TXA, Implied, 2, false),
        0x98 => d(TYA, Implied, 2, false),
        0xBA => d(TSX, Implied, 2, false),
        0x9A => d(TXS, Implied, 2, false),

        // Stack
        0x68 => d(PLA, Implied, 4, false),
        0x48 => d(PHA, Implied, 3, false),
        0x28 => d(PLP, Implied, 4, false),
        0x08 => d(PHP, Implied, 3, false),

        // AND
        0x29 => d(AND, Immediate, 2, false),
        0x25 => d(AND, ZeroPage, 3, false),
        0x35 => d(AND, ZeroPageX, 4, false),
        0x2D => d(AND, Absolute, 4, false),
        0x3D => d(AND, AbsoluteIndexedX, 4, true),
        0x39 => d(AND, AbsoluteIndexedY, 4, true),
        0x21 => d(AND, IndirectX, 6, false),
        0x31 => d(AND, IndirectY, 5, true),

        // ORA
        0x09 => d(ORA, Immediate, 2, false),
        0x05 => d(ORA, ZeroPage, 3, false),
        0x15 => d(ORA, ZeroPageX, 4, false),
        0x0D => d(ORA, Absolute, 4, false),
        0x1D => d(ORA, AbsoluteIndexedX, 4, true),
        0x19 => d(ORA, AbsoluteIndexedY, 4, true),
        0x01 => d(ORA, IndirectX, 6, false),
        0x11 => d(ORA, IndirectY, 5, true),

        // EOR
        0x49 => d(EOR, Immediate, 2, false),
        0x45 => d(EOR, ZeroPage, 3, false),
        0x55 => d(EOR, ZeroPageX, 4, false),
        0x4D => d(EOR, Absolute, 4, false),
        0x5D => d(EOR, AbsoluteIndexedX, 4, true),
        0x59 => d(EOR, AbsoluteIndexedY, 4, true),
        0x41 => d(EOR, IndirectX, 6, false),
        0x51 => d(EOR, IndirectY, 5, true),

        // ADC
        0x69 => d(ADC, Immediate, 2, false),
        0x65 => d(ADC, ZeroPage, 3, false),
        0x75 => d(ADC, ZeroPageX, 4, false),
        0x6D => d(ADC, Absolute, 4, false),
        0x7D => d(ADC, AbsoluteIndexedX, 4, true),
        0x79 => d(ADC, AbsoluteIndexedY, 4, true),
        0x61 => d(ADC, IndirectX, 6, false),
        0x71 => d(ADC, IndirectY, 5, true),

        // SBC
        0xE9 => d(SBC, Immediate, 2, false),
        0xE5 => d(SBC, ZeroPage, 3, false),
        0xF5 => d(SBC, ZeroPageX, 4, false),
        0xED => d(SBC, Absolute, 4, false),
        0xFD => d(SBC, AbsoluteIndexedX, 4, true),
        0xF9 => d(SBC, AbsoluteIndexedY, 4, true),
        0xE1 => d(SBC, IndirectX, 6, false),
        0xF1 => d(SBC, IndirectY, 5, true),

        // CMP
        0xC9 => d(CMP, Immediate, 2, false),
        0xC5 => d(CMP, ZeroPage, 3, false),
        0xD5 => d(CMP, ZeroPageX, 4, false),
        0xCD => d(CMP, Absolute, 4, false),
        0xDD => d(CMP, AbsoluteIndexedX, 4, true),
        0xD9 => d(CMP, AbsoluteIndexedY, 4, true),
        0xC1 => d(CMP, IndirectX, 6, false),
        0xD1 => d(CMP, IndirectY, 5, true),

        // CPX / CPY
        0xE0 => d(CPX, Immediate, 2, false),
        0xE4 => d(CPX, ZeroPage, 3, false),
        0xEC => d(CPX, Absolute, 4, false),
        0xC0 => d(CPY, Immediate, 2, false),
        0xC4 => d(CPY, ZeroPage, 3, false),
        0xCC => d(CPY, Absolute, 4, false),

        // DEC / INC
        0xC6 => d(DEC, ZeroPage, 5, false),
        0xD6 => d(DEC, ZeroPageX, 6, false),
        0xCE => d(DEC, Absolute, 6, false),
        0xDE => d(DEC, AbsoluteIndexedX, 7, false),
        0xE6 => d(INC, ZeroPage, 5, false),
        0xF6 => d(INC, ZeroPageX, 6, false),
        0xEE => d(INC, Absolute, 6, false),
        0xFE => d(INC, AbsoluteIndexedX, 7, false),

        // DEX / DEY / INX / INY
        0xCA => d(DEX, Implied, 2, false),
        0x88 => d(DEY, Implied, 2, false),
        0xE8 => d(INX, Implied, 2, false),
        0xC8 => d(INY, Implied, 2, false),

        // ASL / ROL / LSR / ROR
        0x0A => d(ASL, RegisterA, 2, false),
        0x06 => d(ASL, ZeroPage, 5, false),
        0x16 => d(ASL, ZeroPageX, 6, false),
        0x0E => d(ASL, Absolute, 6, false),
        0x1E => d(ASL, AbsoluteIndexedX, 7, false),
        0x2A => d(ROL, RegisterA, 2, false),
        0x26 => d(ROL, ZeroPage, 5, false),
        0x36 => d(ROL, ZeroPageX, 6, false),
        0x2E => d(ROL, Absolute, 6, false),
        0x3E => d(ROL, AbsoluteIndexedX, 7, false),
        0x4A => d(LSR, RegisterA, 2, false),
        0x46 => d(LSR, ZeroPage, 5, false),
        0x56 => d(LSR, ZeroPageX, 6, false),
        0x4E => d(LSR, Absolute, 6, false),
        0x5E => d(LSR, AbsoluteIndexedX, 7, false),
        0x6A => d(ROR, RegisterA, 2, false),
        0x66 => d(ROR, ZeroPage, 5, false),
        0x76 => d(ROR, ZeroPageX, 6, false),
        0x6E => d(ROR, Absolute, 6, false),
        0x7E => d(ROR, AbsoluteIndexedX, 7, false),

        // BIT
        0x24 => d(BIT, ZeroPage, 3, false),
        0x2C => d(BIT, Absolute, 4, false),

        // Branches (base cycles only; taken/page-cross penalties are applied
        // by the interpreter, not this table).
        0x10 => d(BPL, Relative, 2, false),
        0x30 => d(BMI, Relative, 2, false),
        0x50 => d(BVC, Relative, 2, false),
        0x70 => d(BVS, Relative, 2, false),
        0x90 => d(BCC, Relative, 2, false),
        0xB0 => d(BCS, Relative, 2, false),
        0xD0 => d(BNE, Relative, 2, false),
        0xF0 => d(BEQ, Relative, 2, false),

        // Control flow
        0x00 => d(BRK, Implied, 7, false),
        0x40 => d(RTI, Implied, 6, false),
        0x20 => d(JSR, Absolute, 6, false),
        0x60 => d(RTS, Implied, 6, false),
        0x4C => d(JMP, Absolute, 3, false),
        0x6C => d(JMP, Indirect, 5, false),

        // Flag instructions
        0x18 => d(CLC, Implied, 2, false),
        0x38 => d(SEC, Implied, 2, false),
        0xD8 => d(CLD, Implied, 2, false),
        0xF8 => d(SED, Implied, 2, false),
        0x58 => d(CLI, Implied, 2, false),
        0x78 => d(SEI, Implied, 2, false),
        0xB8 => d(CLV, Implied, 2, false),

        0xEA => d(NOP, Implied, 2, false),

        _ => d(Undefined, Implied, 0, false),
    }
}
