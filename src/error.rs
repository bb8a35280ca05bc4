use crate::mach::{Address, Word};

/// ## Engine and debug channel errors
///
/// Build these with the `error!` macro:
/// `error!(StackUnderflow)`, `error!(OutOfBounds; "ADDRESS 40000")`,
/// `error!(InvalidOpcode, pc)` or `error!(InvalidOpcode, pc; "...")`.
///
/// Which errors stop the machine is decided by where they arise: anything
/// out of `Runtime::execute` faults it, anything out of a debug command
/// is reported and execution carries on.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    opcode: Option<Word>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::error::Error::new($crate::error::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::error::Error::new($crate::error::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::error::Error::new($crate::error::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::error::Error::new($crate::error::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            opcode: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Program counter of the instruction that raised the error.
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// Raw opcode word found at the failing program counter.
    pub fn opcode(&self) -> Option<Word> {
        self.opcode
    }

    pub fn at_address(self, address: Address) -> Error {
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_opcode(self, opcode: Word) -> Error {
        Error {
            opcode: Some(opcode),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOpcode,
    InvalidOperand,
    InvalidDestination,
    StackUnderflow,
    DivisionByZero,
    OutOfBounds,
    SnapshotNotFound,
    SnapshotCorrupt,
    UnrecognizedCommand,
    BadArgument,
    DiskIoError,
    ProgramTooLarge,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            InvalidOpcode => "INVALID OPCODE",
            InvalidOperand => "INVALID OPERAND",
            InvalidDestination => "INVALID DESTINATION",
            StackUnderflow => "STACK UNDERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            OutOfBounds => "OUT OF BOUNDS",
            SnapshotNotFound => "SNAPSHOT NOT FOUND",
            SnapshotCorrupt => "SNAPSHOT CORRUPT",
            UnrecognizedCommand => "UNRECOGNIZED COMMAND",
            BadArgument => "BAD ARGUMENT",
            DiskIoError => "DISK I/O ERROR",
            ProgramTooLarge => "PROGRAM TOO LARGE",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if let Some(opcode) = self.opcode {
            suffix.push_str(&format!(" (OPCODE {})", opcode));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}
