use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

#[derive(Debug)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

#[derive(Debug)]
pub enum TvSystem {
    Ntsc,
    Pal,
    DualCompatible,
}

/// A parsed iNES header. Field names and bit layout follow
/// https://wiki.nesdev.com/w/index.php/INES exactly.
#[derive(Debug)]
pub struct Header {
    pub prg_rom_banks: u8,
    pub prg_rom_bytes: u32,
    pub character_rom_banks: u8,
    pub character_rom_bytes: u32,
    pub mirroring: Mirroring,
    pub persistent_memory: bool,
    pub has_trainer: bool,
    pub four_screen_vram: bool,
    pub mapping_number: u8,
    pub vs_unisystem: bool,
    pub playchoice_10: bool,
    pub prg_ram_size: u32,
    pub tv_system_rarely_used: TvSystem,
    pub tv_system: TvSystem,
    pub has_prg_ram: bool,
    pub bus_conflicts: bool,
}

impl Header {
    /// Offset, in the ROM file, of the first PRG-ROM byte.
    pub fn prg_rom_file_offset(&self) -> usize {
        16 + if self.has_trainer { 512 } else { 0 }
    }

    /// Offset, in the ROM file, of the first CHR-ROM byte.
    pub fn chr_rom_file_offset(&self) -> usize {
        self.prg_rom_file_offset() + self.prg_rom_bytes as usize
    }
}

#[derive(Debug)]
pub enum INesError {
    Io(io::Error),
    InvalidHeader(&'static str),
    NoPrgRom,
}

impl fmt::Display for INesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            INesError::Io(error) => write!(f, "failed to read ROM file: {}", error),
            INesError::InvalidHeader(message) => write!(f, "invalid iNES header: {}", message),
            INesError::NoPrgRom => write!(f, "ROM declares zero PRG-ROM banks"),
        }
    }
}

impl std::error::Error for INesError {}

impl From<io::Error> for INesError {
    fn from(error: io::Error) -> Self {
        INesError::Io(error)
    }
}

impl From<&'static str> for INesError {
    fn from(message: &'static str) -> Self {
        INesError::InvalidHeader(message)
    }
}

struct Byte {
    value: u8,
}

impl Byte {
    /// Get the bit where 0 is the least significant bit, and 7 is the most.
    fn bit(&self, n: u8) -> bool {
        (0b0000_0001 << n) & self.value != 0
    }
}

pub struct Cartridge {
    pub header: Header,
    pub program_rom: Vec<u8>,
    pub character_rom: Vec<u8>,
    // http://forums.nesdev.com/viewtopic.php?t=3657
    // NES trainers are 512 bytes of code loaded at $7000 before the game
    // starts. Safe to ignore for any ROM dump that isn't a hacked copier
    // image.
    pub trainer: Option<Vec<u8>>,
}

impl Cartridge {
    pub fn load_ines_file(path: &Path) -> Result<Cartridge, INesError> {
        let mut file = File::open(path)?;
        let header_bytes = read_bytes(&mut file, 16)?;
        let header = parse_header(&header_bytes[..])?;

        if header.prg_rom_banks == 0 {
            return Err(INesError::NoPrgRom);
        }

        let trainer = if header.has_trainer {
            Some(read_bytes(&mut file, 512)?)
        } else {
            None
        };

        let program_rom = read_bytes(&mut file, header.prg_rom_bytes as usize)?;
        let character_rom = read_bytes(&mut file, header.character_rom_bytes as usize)?;

        Ok(Cartridge {
            header,
            program_rom,
            character_rom,
            trainer,
        })
    }
}

fn parse_header(header: &[u8]) -> Result<Header, INesError> {
    // 0-3: Constant $4E $45 $53 $1A ("NES" followed by MS-DOS end-of-file)
    if header[0..4] != [0x4E, 0x45, 0x53, 0x1A] {
        return Err(INesError::InvalidHeader(
            "missing the 'NES\\x1A' magic bytes",
        ));
    }

    // 4: Size of PRG ROM in 16 KB units
    let prg_rom_banks = header[4];
    let prg_rom_bytes: u32 = prg_rom_banks as u32 * 16 * 1024;

    // 5: Size of CHR ROM in 8 KB units (Value 0 means the board uses CHR RAM)
    let character_rom_banks: u8 = header[5];
    let character_rom_bytes: u32 = character_rom_banks as u32 * 8 * 1024;

    let flag6 = Byte { value: header[6] };
    let flag7 = Byte { value: header[7] };
    let flag8 = Byte { value: header[8] };
    let flag9 = Byte { value: header[9] };
    let flag10 = Byte { value: header[10] };

    // 6: Flags 6 - Mapper, mirroring, battery, trainer
    let mirroring = if flag6.bit(0) {
        Mirroring::Vertical
    } else {
        Mirroring::Horizontal
    };
    let persistent_memory = flag6.bit(1);
    let has_trainer = flag6.bit(2);
    let four_screen_vram = flag6.bit(3);
    let mapping_number_lower = flag6.value >> 4;

    // 7: Flags 7 - Mapper, VS/Playchoice, NES 2.0
    let vs_unisystem = flag7.bit(0);
    let playchoice_10 = flag7.bit(1);
    let nes_2_0 = flag7.bit(3) && !flag7.bit(2);
    let mapping_number_upper = flag7.value & 0b1111_0000;
    let mapping_number = mapping_number_upper | mapping_number_lower;

    if nes_2_0 {
        return Err(INesError::InvalidHeader(
            "NES 2.0 format is not currently supported",
        ));
    }

    // 8: Flags 8 - PRG-RAM size (rarely used extension)
    let prg_ram_size = flag8.value.max(1) as u32 * 8 * 1024;

    // 9: Flags 9 - TV system (rarely used extension)
    let tv_system_rarely_used = if flag9.bit(0) {
        TvSystem::Pal
    } else {
        TvSystem::Ntsc
    };

    // 10: Flags 10 - TV system, PRG-RAM presence (unofficial extension)
    let tv_system = match (flag10.value & 0b0000_0011) as u8 {
        0 => TvSystem::Ntsc,
        2 => TvSystem::Pal,
        _ => TvSystem::DualCompatible,
    };
    let has_prg_ram = !flag10.bit(4);
    let bus_conflicts = flag10.bit(5);

    Ok(Header {
        prg_rom_banks,
        prg_rom_bytes,
        character_rom_banks,
        character_rom_bytes,
        mirroring,
        persistent_memory,
        has_trainer,
        four_screen_vram,
        mapping_number,
        vs_unisystem,
        playchoice_10,
        prg_ram_size,
        tv_system_rarely_used,
        tv_system,
        has_prg_ram,
        bus_conflicts,
    })
}

fn read_bytes(file: &mut File, size: usize) -> Result<Vec<u8>, io::Error> {
    let mut vec = Vec::new();
    let read_bytes = file.take(size as u64).read_to_end(&mut vec)?;
    assert_eq!(size, read_bytes);
    Ok(vec)
}
