use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;

use cpu_6502::bus::FlatBus;
use cpu_6502::cpu::Cpu6502;
use cpu_6502::ines::{Cartridge, INesError};
use cpu_6502::mappers::{NromMapper, SimpleProgram};

/// Run a 6502 machine-code image for a fixed number of cycles and print the
/// final CPU state.
///
/// Grounded in `main.c`'s host loop: load PRG-ROM at `$8000` (mirroring a
/// single 16KB bank to `$C000`), reset, seed PC from the reset vector, run a
/// fixed cycle budget.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an iNES (.nes) ROM image.
    #[arg(default_value = "rom.nes")]
    rom: PathBuf,

    /// Number of cycles to run. Defaults to one NTSC frame's worth.
    #[arg(long, default_value_t = 29780)]
    cycles: u64,

    /// Treat `rom` as a raw flat binary loaded at $8000 and start execution
    /// at this address instead of the ROM's own reset vector. Lets
    /// freestanding test images run without a valid iNES header.
    #[arg(long, value_name = "ADDR")]
    reset_vector_override: Option<String>,
}

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    INes(INesError),
    BadAddress(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(error) => write!(f, "failed to read ROM file: {error}"),
            CliError::INes(error) => write!(f, "{error}"),
            CliError::BadAddress(raw) => {
                write!(f, "--reset-vector-override expects a hex address, got {raw:?}")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<INesError> for CliError {
    fn from(error: INesError) -> Self {
        CliError::INes(error)
    }
}

fn parse_address(raw: &str) -> Result<u16, CliError> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    u16::from_str_radix(digits, 16).map_err(|_| CliError::BadAddress(raw.to_string()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let (mut bus, override_pc) = match &args.reset_vector_override {
        Some(raw_override) => {
            let override_address = parse_address(raw_override)?;
            let program = std::fs::read(&args.rom)?;
            let bus = FlatBus::with_mapper(Box::new(SimpleProgram::load(&program)));
            (bus, Some(override_address))
        }
        None => {
            let cartridge = Cartridge::load_ines_file(&args.rom)?;
            println!(
                "{} {} PRG bank(s), {} CHR bank(s), mapper {}",
                "loaded".green(),
                cartridge.header.prg_rom_banks,
                cartridge.header.character_rom_banks,
                cartridge.header.mapping_number,
            );
            let bus = FlatBus::with_mapper(Box::new(NromMapper::new(cartridge.program_rom)));
            (bus, None)
        }
    };

    let mut cpu = Cpu6502::new();
    cpu.reset(&mut bus);
    if let Some(pc) = override_pc {
        cpu.pc = pc;
    }

    finish(cpu, bus, args.cycles)
}

fn finish(mut cpu: Cpu6502, mut bus: FlatBus, cycle_budget: u64) -> Result<(), CliError> {
    let consumed = cpu.run(&mut bus, cycle_budget);

    println!();
    println!("{}", "-- CPU state --".yellow());
    println!("PC: {:#06x}   S: {:#04x}   P: {:#010b}", cpu.pc, cpu.s, cpu.p);
    println!("A:  {:#04x}     X: {:#04x}   Y: {:#04x}", cpu.a, cpu.x, cpu.y);
    println!("cycles consumed: {consumed} / requested {cycle_budget}");

    if cpu.halted {
        println!("{}", "halted on an undefined opcode".red());
    } else {
        println!("{}", "ok".green());
    }

    Ok(())
}
