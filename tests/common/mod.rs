#![allow(dead_code)]

use std::path::PathBuf;
use synacor::mach::{Config, Diagnostics, Event, Memory, Quiet, Runtime, Word};

pub const R0: Word = 32768;
pub const R1: Word = 32769;
pub const R2: Word = 32770;

pub fn runtime(words: &[Word]) -> Runtime {
    Runtime::with_memory(Memory::from_words(words.to_vec()).unwrap())
}

pub fn runtime_in(dir: &PathBuf, words: &[Word]) -> Runtime {
    runtime_with(dir, words, Box::new(Quiet::default()))
}

pub fn runtime_with(dir: &PathBuf, words: &[Word], log: Box<dyn Diagnostics>) -> Runtime {
    let config = Config {
        snapshot_dir: dir.clone(),
        ..Config::default()
    };
    Runtime::new(Memory::from_words(words.to_vec()).unwrap(), config, log)
}

/// Fresh directory for snapshot files.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("synacor-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Input => {
                break;
            }
            Event::Fault(error) => {
                s.push_str(&format!("!{}\n", error));
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&String::from_utf8_lossy(ps));
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
