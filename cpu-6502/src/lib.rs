// Remove this once this is a bit more mature.
#![allow(dead_code)]
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod ines;
pub mod mappers;
