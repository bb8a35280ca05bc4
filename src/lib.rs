//! # Synacor VM
//!
//! A virtual machine for the 15-bit register architecture of the Synacor
//! Challenge: eight registers, an unbounded stack, 22 instructions and a
//! memory image of little-endian 16-bit words.
//!
//! Run a program image with `synacor challenge.bin`. While the program is
//! waiting for input, a line starting with `!` is a command for the
//! machine instead of the program:
//! ```text
//! !save beach        write beach.state and beach.mem
//! !load beach        resume from them
//! !setreg 7 25734    overwrite a register
//! !barfreg           list the registers
//! !barfstack         list the stack, bottom first
//! !barfmem 6027 4    list memory words
//! !dis 6027 5        list instructions
//! !logging on        trace every instruction on standard error
//! ```
//!
//! `synacor --disassemble challenge.bin 6027 20` prints a listing
//! without running anything.

pub mod error;
pub mod mach;
pub mod term;
