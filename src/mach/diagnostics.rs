use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Trace => f.pad("TRACE"),
            Level::Info => f.pad("INFO"),
            Level::Warn => f.pad("WARN"),
            Level::Error => f.pad("ERROR"),
        }
    }
}

/// ## Diagnostic log sink
///
/// Handed to the runtime at construction. Warnings and errors always
/// pass; trace and info lines only while verbose.
pub trait Diagnostics {
    fn write(&mut self, level: Level, message: &str);
    fn verbose(&self) -> bool;
    fn set_verbose(&mut self, verbose: bool);

    fn log(&mut self, level: Level, message: &str) {
        if level >= Level::Warn || self.verbose() {
            self.write(level, message);
        }
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct Quiet {
    verbose: bool,
}

impl Diagnostics for Quiet {
    fn write(&mut self, _level: Level, _message: &str) {}
    fn verbose(&self) -> bool {
        self.verbose
    }
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}

/// Keeps every line that gets through. Clones share the same buffer,
/// so a copy can be inspected after the runtime took ownership.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    lines: Rc<RefCell<Vec<String>>>,
    verbose: bool,
}

impl Capture {
    pub fn new() -> Capture {
        Capture::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Diagnostics for Capture {
    fn write(&mut self, level: Level, message: &str) {
        self.lines
            .borrow_mut()
            .push(format!("[{}] {}", level, message));
    }
    fn verbose(&self) -> bool {
        self.verbose
    }
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}
