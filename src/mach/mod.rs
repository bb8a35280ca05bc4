/*!
## Rust Machine Module

This Rust module is the virtual machine: a register machine of 15-bit
words with eight registers, an unbounded stack and a flat memory image.

*/

/// A memory cell, operand or register value.
pub type Word = u16;
/// Index into memory.
pub type Address = usize;

/// Arithmetic is modulo this; it is also the first register reference.
pub const MODULUS: Word = 32768;
/// Highest legal operand word (register 7).
pub const MAX_WORD: Word = 32775;
pub const REGISTER_COUNT: usize = 8;

mod command;
mod config;
mod diagnostics;
mod listing;
mod memory;
mod opcode;
mod operand;
mod registers;
mod runtime;
mod snapshot;
mod stack;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::Config;
pub use diagnostics::Capture;
pub use diagnostics::Diagnostics;
pub use diagnostics::Level;
pub use diagnostics::Quiet;
pub use listing::Listing;
pub use memory::Memory;
pub use opcode::Opcode;
pub use operand::{destination, resolve, Operand};
pub use registers::Registers;
pub use runtime::Event;
pub use runtime::Runtime;
pub use snapshot::Snapshot;
pub use stack::Stack;
