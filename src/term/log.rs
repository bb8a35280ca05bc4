use crate::mach::{Diagnostics, Level};
use ansi_term::{Colour, Style};
use chrono::Local;

/// Diagnostics on standard error, one timestamped line each.
#[derive(Debug, Default)]
pub struct StderrLog {
    verbose: bool,
}

impl StderrLog {
    pub fn new() -> StderrLog {
        StderrLog::default()
    }
}

impl Diagnostics for StderrLog {
    fn write(&mut self, level: Level, message: &str) {
        let style = match level {
            Level::Trace => Style::new().dimmed(),
            Level::Info => Style::new(),
            Level::Warn => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        };
        eprintln!(
            "{} {}",
            Local::now().format("%H:%M:%S%.3f"),
            style.paint(format!("[{:5}] {}", level, message))
        );
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}
