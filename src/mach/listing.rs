use super::{Address, Memory, Opcode, Operand, Word};
use std::convert::TryFrom;

/// ## Instruction listing
///
/// Renders memory as instructions without executing anything:
/// `"6027 (0x2f16): ADD <0> <1> 1"`. The hex column is the byte offset
/// into the image. Instruction widths come from `Opcode::arity`, the
/// same table the runtime dispatches on.

#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    memory: &'a Memory,
}

impl<'a> Listing<'a> {
    pub fn new(memory: &'a Memory) -> Listing<'a> {
        Listing { memory }
    }

    /// One instruction and the address following it. `None` when the
    /// word at `addr` is not an opcode or lies past the end of memory.
    pub fn line(&self, addr: Address) -> Option<(String, Address)> {
        let word = self.memory.read(addr).ok()?;
        let opcode = Opcode::decode(word)?;
        let mut s = format!("{} ({:#x}): {}", addr, addr * 2, opcode);
        for offset in 1..=opcode.arity() {
            s.push(' ');
            match self.memory.read(addr + offset) {
                Ok(raw) if opcode == Opcode::Out => s.push_str(&character(raw)),
                Ok(raw) => s.push_str(&operand(raw)),
                Err(_) => s.push('?'),
            }
        }
        Some((s, addr + opcode.width()))
    }

    /// Up to `count` instructions from `start`. Words that do not decode
    /// are stepped over one address at a time.
    pub fn lines(&self, start: Address, count: usize) -> Vec<String> {
        let mut lines = vec![];
        let mut addr = start;
        while lines.len() < count && addr < self.memory.len() {
            match self.line(addr) {
                Some((s, next)) => {
                    lines.push(s);
                    addr = next;
                }
                None => addr += 1,
            }
        }
        lines
    }
}

fn operand(raw: Word) -> String {
    match Operand::try_from(raw) {
        Ok(op) => op.to_string(),
        Err(_) => format!("?{}", raw),
    }
}

fn character(raw: Word) -> String {
    match Operand::try_from(raw) {
        Ok(Operand::Literal(word)) => char::from((word % 256) as u8).escape_default().to_string(),
        _ => operand(raw),
    }
}
