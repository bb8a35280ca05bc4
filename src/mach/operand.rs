use super::{Registers, Word, MAX_WORD, MODULUS, REGISTER_COUNT};
use crate::error;
use crate::error::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand classification
///
/// A raw word below 32768 is a literal, 32768..=32775 names one of the
/// eight registers. Anything larger is not a legal operand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(Word),
    Register(usize),
}

impl Operand {
    /// The value this operand stands for right now.
    pub fn value(self, registers: &Registers) -> Word {
        match self {
            Operand::Literal(word) => word,
            Operand::Register(index) => registers.get(index).unwrap_or_default(),
        }
    }
}

impl TryFrom<Word> for Operand {
    type Error = Error;

    fn try_from(raw: Word) -> Result<Operand> {
        if raw < MODULUS {
            Ok(Operand::Literal(raw))
        } else if raw <= MAX_WORD {
            Ok(Operand::Register((raw - MODULUS) as usize))
        } else {
            Err(error!(InvalidOperand; &format!("WORD {}", raw)))
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Literal(word) => write!(f, "{}", word),
            Operand::Register(index) => write!(f, "<{}>", index),
        }
    }
}

/// Resolve a raw operand word against the register bank.
pub fn resolve(raw: Word, registers: &Registers) -> Result<Word> {
    Ok(Operand::try_from(raw)?.value(registers))
}

/// Register index named by a destination operand. Writes never target
/// a literal.
pub fn destination(raw: Word) -> Result<usize> {
    match Operand::try_from(raw) {
        Ok(Operand::Register(index)) if index < REGISTER_COUNT => Ok(index),
        _ => Err(error!(InvalidDestination; &format!("WORD {}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_literal_resolves_to_itself() {
        let registers = Registers::default();
        assert_eq!(resolve(0, &registers), Ok(0));
        assert_eq!(resolve(32767, &registers), Ok(32767));
    }

    #[test]
    fn test_register_resolves_to_contents() {
        let mut registers = Registers::default();
        registers.set(7, 25734);
        assert_eq!(resolve(32775, &registers), Ok(25734));
        assert_eq!(resolve(32768, &registers), Ok(0));
    }

    #[test]
    fn test_out_of_range_operand() {
        let registers = Registers::default();
        let e = resolve(32776, &registers).unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidOperand);
    }

    #[test]
    fn test_destination_must_be_register() {
        assert_eq!(destination(32770), Ok(2));
        assert_eq!(
            destination(5).unwrap_err().code(),
            ErrorCode::InvalidDestination
        );
        assert_eq!(
            destination(40000).unwrap_err().code(),
            ErrorCode::InvalidDestination
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::Literal(12).to_string(), "12");
        assert_eq!(Operand::Register(3).to_string(), "<3>");
    }
}
