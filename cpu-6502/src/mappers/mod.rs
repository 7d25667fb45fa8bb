mod nrom;
mod simple;

pub use nrom::NromMapper;
pub use simple::SimpleProgram;

/// A cartridge's view onto the CPU's address space. `read_cpu`/`write_cpu`
/// return `None`/`false` when the address does not belong to the cartridge,
/// letting the bus fall through to its own backing memory.
///
/// This crate implements only NROM (mapper 0) and the `SimpleProgram` test
/// cartridge; modeling the wider mapper zoo is out of scope (see Non-goals).
pub trait Mapper {
    fn read_cpu(&self, addr: u16) -> Option<u8>;
    fn write_cpu(&mut self, addr: u16, value: u8) -> bool;
}
