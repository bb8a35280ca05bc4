use super::operand::{destination, resolve};
use super::{
    Address, Command, Config, Diagnostics, Level, Listing, Memory, Opcode, Quiet, Registers,
    Snapshot, Stack, Word, MODULUS,
};
use crate::error;
use crate::error::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// `execute` runs a slice of instructions and reports back with an
/// `Event`. The runtime never blocks: when `in` finds no queued input it
/// returns `Event::Input` with the counter still on the `in`, and the
/// host supplies a line through `enter` before executing again.

pub struct Runtime {
    config: Config,
    memory: Memory,
    registers: Registers,
    stack: Stack<Word>,
    pc: Address,
    state: State,
    input: VecDeque<u8>,
    print: Vec<u8>,
    events: VecDeque<Event>,
    log: Box<dyn Diagnostics>,
}

/// Outcome of an `execute` slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Cycle budget spent, still running.
    Running,
    /// Halted. Repeats on every later call.
    Stopped,
    /// An `in` instruction is waiting for console input.
    Input,
    /// Console output bytes, one per `out`. Flushed at each newline and
    /// ahead of any other event.
    Print(Vec<u8>),
    /// Operator-facing text from the debug channel.
    List(String),
    /// A debug command failed. Nothing changed; execution continues.
    Error(Error),
    /// Execution-fatal error. Repeats on every later call.
    Fault(Error),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Running,
    Halted,
    Faulted(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Memory::default(), Config::default(), Box::new(Quiet::default()))
    }
}

impl Runtime {
    pub fn new(memory: Memory, config: Config, mut log: Box<dyn Diagnostics>) -> Runtime {
        log.set_verbose(config.verbose);
        Runtime {
            config,
            memory,
            registers: Registers::new(),
            stack: Stack::new(),
            pc: 0,
            state: State::Running,
            input: VecDeque::new(),
            print: Vec::new(),
            events: VecDeque::new(),
            log,
        }
    }

    /// Default configuration, no diagnostics.
    pub fn with_memory(memory: Memory) -> Runtime {
        Runtime::new(memory, Config::default(), Box::new(Quiet::default()))
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn stack(&self) -> &Stack<Word> {
        &self.stack
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn fault(&self) -> Option<&Error> {
        match &self.state {
            State::Faulted(error) => Some(error),
            _ => None,
        }
    }

    /// Queue a line of console input. A newline is appended.
    pub fn enter(&mut self, line: &str) {
        self.input.extend(line.bytes());
        self.input.push_back(b'\n');
    }

    /// Stop at the next instruction boundary.
    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.state = State::Halted;
            self.log
                .log(Level::Info, &format!("interrupted at {}", self.pc));
            self.events
                .push_back(Event::List(format!("BREAK AT {}", self.pc)));
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            registers: self.registers.clone(),
            stack: self.stack.iter().copied().collect(),
            memory: self.memory.clone(),
        }
    }

    /// Replace counter, registers, stack and memory in one step.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pc = snapshot.pc;
        self.registers = snapshot.registers;
        self.stack = Stack::from(snapshot.stack);
        self.memory = snapshot.memory;
        self.state = State::Running;
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match &self.state {
            State::Halted => return self.emit(Event::Stopped),
            State::Faulted(error) => {
                let event = Event::Fault(error.clone());
                return self.emit(event);
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return self.emit(event),
                Err(error) => {
                    self.log.log(Level::Error, &error.to_string());
                    self.state = State::Faulted(error.clone());
                    return self.emit(Event::Fault(error));
                }
            }
        }
        self.emit(Event::Running)
    }

    /// Pending console output goes out first. Events the state would
    /// produce again on the next call are not queued.
    fn emit(&mut self, event: Event) -> Event {
        if self.print.is_empty() {
            return event;
        }
        match event {
            Event::Running | Event::Stopped | Event::Input | Event::Fault(_) => {}
            event => self.events.push_back(event),
        }
        Event::Print(std::mem::take(&mut self.print))
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let pc = self.pc;
        let word = self.memory.read(pc).map_err(|e| e.at_address(pc))?;
        let opcode = match Opcode::decode(word) {
            Some(opcode) => opcode,
            None => return Err(error!(InvalidOpcode, pc).in_opcode(word)),
        };
        if self.log.verbose() {
            if let Some((line, _)) = Listing::new(&self.memory).line(pc) {
                self.log.log(Level::Trace, &line);
            }
        }
        self.dispatch(pc, opcode)
            .map_err(|e| e.at_address(pc).in_opcode(word))
    }

    fn operands(&self, pc: Address, opcode: Opcode) -> Result<[Word; 3]> {
        let mut args = [0; 3];
        for (i, arg) in args.iter_mut().take(opcode.arity()).enumerate() {
            *arg = self.memory.read(pc + 1 + i)?;
        }
        Ok(args)
    }

    fn value(&self, raw: Word) -> Result<Word> {
        resolve(raw, &self.registers)
    }

    fn set_register(&mut self, index: usize, value: Word) {
        if self.log.verbose() {
            self.log
                .log(Level::Trace, &format!("<{}> := {}", index, value));
        }
        self.registers.set(index, value);
    }

    fn dispatch(&mut self, pc: Address, opcode: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        let [a, b, c] = self.operands(pc, opcode)?;
        let next = pc + opcode.width();
        match opcode {
            Halt => {
                self.pc = next;
                self.state = State::Halted;
                self.log.log(Level::Info, &format!("halted at {}", pc));
                return Ok(Some(Event::Stopped));
            }
            Set => {
                let dest = destination(a)?;
                let value = self.value(b)?;
                self.set_register(dest, value);
            }
            Push => {
                let value = self.value(a)?;
                self.stack.push(value);
            }
            Pop => {
                let dest = destination(a)?;
                let value = self.stack.pop()?;
                self.set_register(dest, value);
            }
            Eq | Gt => {
                let dest = destination(a)?;
                let (lhs, rhs) = (self.value(b)?, self.value(c)?);
                let truth = if opcode == Eq { lhs == rhs } else { lhs > rhs };
                self.set_register(dest, truth as Word);
            }
            Jmp => {
                self.pc = self.value(a)? as Address;
                return Ok(None);
            }
            Jt | Jf => {
                let cond = self.value(a)?;
                let target = self.value(b)?;
                if (cond != 0) == (opcode == Jt) {
                    self.pc = target as Address;
                    return Ok(None);
                }
            }
            Add | Mult | Mod | And | Or => {
                let dest = destination(a)?;
                let (lhs, rhs) = (self.value(b)? as u32, self.value(c)? as u32);
                let modulus = MODULUS as u32;
                let result = match opcode {
                    Add => (lhs + rhs) % modulus,
                    Mult => (lhs * rhs) % modulus,
                    Mod => {
                        if rhs == 0 {
                            return Err(error!(DivisionByZero));
                        }
                        lhs % rhs
                    }
                    And => lhs & rhs,
                    _ => lhs | rhs,
                };
                self.set_register(dest, result as Word);
            }
            Not => {
                let dest = destination(a)?;
                let value = self.value(b)?;
                self.set_register(dest, !value & (MODULUS - 1));
            }
            Rmem => {
                let dest = destination(a)?;
                let addr = self.value(b)? as Address;
                let value = self.memory.read(addr)?;
                self.set_register(dest, value);
            }
            Wmem => {
                let addr = self.value(a)? as Address;
                let value = self.value(b)?;
                self.memory.write(addr, value)?;
                if self.log.verbose() {
                    self.log
                        .log(Level::Trace, &format!("[{}] := {}", addr, value));
                }
            }
            Call => {
                let target = self.value(a)? as Address;
                self.stack.push(next as Word);
                self.pc = target;
                return Ok(None);
            }
            Ret => match self.stack.pop() {
                Ok(addr) => {
                    self.pc = addr as Address;
                    return Ok(None);
                }
                Err(_) => {
                    self.pc = next;
                    self.state = State::Halted;
                    self.log
                        .log(Level::Info, &format!("return with empty stack at {}", pc));
                    return Ok(Some(Event::Stopped));
                }
            },
            Out => {
                let byte = (self.value(a)? % 256) as u8;
                self.print.push(byte);
                self.pc = next;
                if byte == b'\n' {
                    return Ok(Some(Event::Print(std::mem::take(&mut self.print))));
                }
                return Ok(None);
            }
            In => {
                let dest = destination(a)?;
                match self.input.pop_front() {
                    None => return Ok(Some(Event::Input)),
                    Some(byte) if byte == self.config.sentinel => {
                        let line = self.read_command_line();
                        return Ok(Some(self.command(&line)));
                    }
                    Some(byte) => self.set_register(dest, byte as Word),
                }
            }
            Noop => {}
        }
        self.pc = next;
        Ok(None)
    }

    fn read_command_line(&mut self) -> String {
        let mut bytes = vec![];
        while let Some(byte) = self.input.pop_front() {
            if byte == b'\n' {
                break;
            }
            bytes.push(byte);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Run one debug channel command. Failures are reported, never fatal,
    /// and leave the machine as it was.
    pub fn command(&mut self, line: &str) -> Event {
        self.log.log(Level::Info, &format!("debug command: {}", line.trim()));
        match Command::parse(line).and_then(|command| self.run_command(command)) {
            Ok(text) => Event::List(text),
            Err(error) => {
                self.log.log(Level::Warn, &error.to_string());
                Event::Error(error)
            }
        }
    }

    fn run_command(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Save(name) => {
                let name = name.unwrap_or_else(|| self.config.default_snapshot.clone());
                let snapshot = self.snapshot();
                snapshot.save(&self.config.snapshot_dir, &name)?;
                let report = describe("SAVED", &name, &snapshot);
                self.log.log(Level::Info, &report);
                Ok(report)
            }
            Command::Load(name) => {
                let name = name.unwrap_or_else(|| self.config.default_snapshot.clone());
                let snapshot = Snapshot::load(&self.config.snapshot_dir, &name)?;
                let report = describe("LOADED", &name, &snapshot);
                self.restore(snapshot);
                self.log.log(Level::Info, &report);
                Ok(report)
            }
            Command::SetReg(index, value) => {
                if !self.registers.set(index, value) {
                    return Err(error!(BadArgument; &format!("NO REGISTER {}", index)));
                }
                self.log
                    .log(Level::Info, &format!("<{}> := {} by operator", index, value));
                Ok(format!("<{}> = {}", index, value))
            }
            Command::BarfReg => Ok(self
                .registers
                .iter()
                .enumerate()
                .map(|(index, value)| format!("<{}> = {}", index, value))
                .collect::<Vec<_>>()
                .join("\n")),
            Command::BarfStack => {
                if self.stack.is_empty() {
                    return Ok("STACK EMPTY".to_string());
                }
                Ok(self
                    .stack
                    .iter()
                    .enumerate()
                    .map(|(depth, value)| format!("{}: {}", depth, value))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::BarfMem(addr, count) => {
                self.inspectable(addr)?;
                let end = std::cmp::min(addr.saturating_add(count), self.memory.len());
                Ok(self.memory.words()[addr..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, word)| format!("{}: {}", addr + offset, word))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Dis(addr, count) => {
                let addr = addr.unwrap_or(self.pc);
                self.inspectable(addr)?;
                Ok(Listing::new(&self.memory).lines(addr, count).join("\n"))
            }
            Command::Logging(on) => {
                self.log.set_verbose(on);
                Ok(format!("LOGGING {}", if on { "ON" } else { "OFF" }))
            }
        }
    }

    fn inspectable(&self, addr: Address) -> Result<()> {
        if addr < self.memory.len() {
            return Ok(());
        }
        Err(error!(BadArgument; &format!("ADDRESS {} OUTSIDE MEMORY OF {}", addr, self.memory.len())))
    }
}

fn describe(verb: &str, name: &str, snapshot: &Snapshot) -> String {
    format!(
        "{} {} AT {} ({} WORDS, CRC32 {:08X})",
        verb,
        name,
        snapshot.pc,
        snapshot.memory.len(),
        snapshot.checksum()
    )
}
