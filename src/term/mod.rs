extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult, Signal};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod log;
pub use self::log::StderrLog;

const CYCLES: usize = 5000;

/// Run the machine against the terminal until it halts, faults or the
/// input ends. Ctrl-C stops it at the next instruction.
pub fn main(runtime: Runtime) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(runtime, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> io::Result<()> {
    let console = Interface::new("synacor")?;
    console.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(bytes) => {
                let mut stdout = io::stdout();
                stdout.write_all(&bytes)?;
                stdout.flush()?;
            }
            Event::Input => match console.read_line()? {
                ReadResult::Input(string) => {
                    runtime.enter(&string);
                    if !string.is_empty() {
                        console.add_history_unique(string);
                    }
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    console.set_buffer("")?;
                    runtime.interrupt();
                }
                ReadResult::Signal(_) | ReadResult::Eof => break,
            },
            Event::List(s) => {
                console.write_fmt(format_args!("{}\n", Style::new().dimmed().paint(s)))?;
            }
            Event::Error(error) => {
                console.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Fault(error) => {
                console.write_fmt(format_args!(
                    "{}\n",
                    Colour::Red.bold().paint(error.to_string())
                ))?;
                break;
            }
            Event::Stopped => break,
        }
    }
    Ok(())
}
