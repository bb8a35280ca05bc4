use super::{Address, Memory, Registers, Word, REGISTER_COUNT};
use crate::error;
use crate::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

/// ## Saved machine state
///
/// Written as two files: `<name>.state` holds the program counter, the
/// eight registers and the stack (bottom first), one decimal per line.
/// `<name>.mem` is the memory as raw little-endian words, the same
/// layout as a program image.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pc: Address,
    pub registers: Registers,
    pub stack: Vec<Word>,
    pub memory: Memory,
}

impl Snapshot {
    pub fn paths(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
        (
            dir.join(format!("{}.state", name)),
            dir.join(format!("{}.mem", name)),
        )
    }

    /// The text record.
    pub fn record(&self) -> String {
        let mut s = format!("{}\n", self.pc);
        for value in self.registers.iter().chain(self.stack.iter()) {
            s.push_str(&format!("{}\n", value));
        }
        s
    }

    /// CRC-32 of the memory dump.
    pub fn checksum(&self) -> u32 {
        crc::crc32::checksum_ieee(&self.memory.to_bytes())
    }

    /// Builds a snapshot from both artifacts. Nothing is returned unless
    /// every part parsed and the counter lands inside the memory.
    pub fn parse(record: &str, dump: &[u8]) -> Result<Snapshot> {
        if dump.len() % 2 != 0 {
            return Err(error!(SnapshotCorrupt; "ODD LENGTH MEMORY DUMP"));
        }
        let memory = match Memory::from_bytes(dump) {
            Ok(memory) => memory,
            Err(e) => return Err(error!(SnapshotCorrupt; &e.to_string())),
        };
        let mut lines = record
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let pc = match lines.next() {
            Some((number, line)) => match line.parse::<Address>() {
                Ok(pc) => pc,
                Err(_) => return Err(corrupt_line(number)),
            },
            None => return Err(error!(SnapshotCorrupt; "EMPTY RECORD")),
        };
        if pc >= memory.len() {
            return Err(error!(SnapshotCorrupt; &format!("COUNTER {} OUTSIDE MEMORY", pc)));
        }

        let mut registers = [0; REGISTER_COUNT];
        for cell in registers.iter_mut() {
            *cell = match lines.next() {
                Some((number, line)) => parse_word(number, line)?,
                None => return Err(error!(SnapshotCorrupt; "MISSING REGISTERS")),
            };
        }

        let mut stack = vec![];
        for (number, line) in lines {
            stack.push(parse_word(number, line)?);
        }

        Ok(Snapshot {
            pc,
            registers: Registers::from_array(registers),
            stack,
            memory,
        })
    }

    /// Both files are written under `.tmp` names first and only renamed
    /// into place once both writes succeeded, so a failed save leaves any
    /// earlier snapshot of the same name intact.
    pub fn save(&self, dir: &Path, name: &str) -> Result<()> {
        let (state_path, mem_path) = Snapshot::paths(dir, name);
        let (state_tmp, mem_tmp) = (temporary(&state_path), temporary(&mem_path));
        fs::create_dir_all(dir).map_err(|e| disk_error(dir, e))?;
        write(&state_tmp, self.record().as_bytes())?;
        if let Err(e) = write(&mem_tmp, &self.memory.to_bytes()) {
            let _ = fs::remove_file(&state_tmp);
            return Err(e);
        }
        fs::rename(&mem_tmp, &mem_path).map_err(|e| disk_error(&mem_path, e))?;
        fs::rename(&state_tmp, &state_path).map_err(|e| disk_error(&state_path, e))
    }

    pub fn load(dir: &Path, name: &str) -> Result<Snapshot> {
        let (state_path, mem_path) = Snapshot::paths(dir, name);
        let record = read(&state_path)?;
        let record = match String::from_utf8(record) {
            Ok(record) => record,
            Err(_) => return Err(error!(SnapshotCorrupt; "RECORD IS NOT TEXT")),
        };
        let dump = read(&mem_path)?;
        Snapshot::parse(&record, &dump)
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            let msg = path.display().to_string();
            match e.kind() {
                ErrorKind::NotFound => Err(error!(SnapshotNotFound; &msg)),
                _ => Err(disk_error(path, e)),
            }
        }
    }
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| disk_error(path, e))
}

fn temporary(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn disk_error(path: &Path, e: std::io::Error) -> Error {
    error!(DiskIoError; &format!("{}: {}", path.display(), e))
}

fn parse_word(number: usize, line: &str) -> Result<Word> {
    line.parse::<Word>().map_err(|_| corrupt_line(number))
}

fn corrupt_line(number: usize) -> Error {
    error!(SnapshotCorrupt; &format!("RECORD LINE {}", number))
}
