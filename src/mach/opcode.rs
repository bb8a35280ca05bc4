use super::Word;

/// ## Virtual machine instruction set
///
/// Every instruction is an opcode word followed by a fixed number of
/// operand words. Operands are literals (0..=32767) or register
/// references (32768..=32775).
///
/// For example: `ADD <2> <0> 5` is stored as `[9, 32770, 32768, 5]`
/// and leaves the program counter four words further on.
///
/// The engine and the listing both take instruction width from
/// `Opcode::arity` so a trace can never drift from execution.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Stop execution.
    Halt,
    /// `a := b`
    Set,
    /// Push `a` on to the stack.
    Push,
    /// Pop the stack into `a`. Empty stack is a fault.
    Pop,
    /// `a := (b == c) as 1 or 0`
    Eq,
    /// `a := (b > c) as 1 or 0`
    Gt,
    /// Unconditional branch to `a`.
    Jmp,
    /// Branch to `b` if `a` is nonzero.
    Jt,
    /// Branch to `b` if `a` is zero.
    Jf,
    Add,
    Mult,
    Mod,
    And,
    Or,
    Not,
    /// `a := memory[b]`
    Rmem,
    /// `memory[a] := b`
    Wmem,
    /// Push the address after this instruction and branch to `a`.
    Call,
    /// Pop an address and branch to it. Empty stack halts.
    Ret,
    /// Write character `a` to the console.
    Out,
    /// Read one console character into `a`.
    In,
    Noop,
}

const OPCODES: [Opcode; 22] = {
    use Opcode::*;
    [
        Halt, Set, Push, Pop, Eq, Gt, Jmp, Jt, Jf, Add, Mult, Mod, And, Or, Not, Rmem, Wmem, Call,
        Ret, Out, In, Noop,
    ]
};

impl Opcode {
    pub fn decode(word: Word) -> Option<Opcode> {
        OPCODES.get(word as usize).copied()
    }

    pub fn encode(self) -> Word {
        self as Word
    }

    /// Number of operand words following the opcode.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Halt | Ret | Noop => 0,
            Push | Pop | Jmp | Call | Out | In => 1,
            Set | Jt | Jf | Not | Rmem | Wmem => 2,
            Eq | Gt | Add | Mult | Mod | And | Or => 3,
        }
    }

    /// Words occupied by the whole instruction.
    pub fn width(self) -> usize {
        1 + self.arity()
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Set => write!(f, "SET"),
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Eq => write!(f, "EQ"),
            Gt => write!(f, "GT"),
            Jmp => write!(f, "JMP"),
            Jt => write!(f, "JT"),
            Jf => write!(f, "JF"),
            Add => write!(f, "ADD"),
            Mult => write!(f, "MULT"),
            Mod => write!(f, "MOD"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
            Rmem => write!(f, "RMEM"),
            Wmem => write!(f, "WMEM"),
            Call => write!(f, "CALL"),
            Ret => write!(f, "RET"),
            Out => write!(f, "OUT"),
            In => write!(f, "IN"),
            Noop => write!(f, "NOOP"),
        }
    }
}
