//! # Synacor VM
//!
//! `synacor <image> [--load NAME] [--dir PATH] [--sentinel CHAR] [--trace]`
//!
//! `synacor --disassemble <image> [START=0] [COUNT=100]`

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use synacor::mach::{Config, Listing, Memory, Runtime, Snapshot};
use synacor::term::{self, StderrLog};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--disassemble") {
        disassemble(&args[1..]);
    } else {
        run(&args);
    }
}

fn run(args: &[String]) {
    let mut config = Config::default();
    let mut image = None;
    let mut snapshot = None;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--load" => snapshot = Some(value(args.next(), "--load")),
            "--dir" => config.snapshot_dir = PathBuf::from(value(args.next(), "--dir")),
            "--sentinel" => {
                let s = value(args.next(), "--sentinel");
                match s.as_bytes() {
                    [byte] => config.sentinel = *byte,
                    _ => usage("--sentinel takes one ASCII character"),
                }
            }
            "--trace" => config.verbose = true,
            _ if image.is_none() && !arg.starts_with("--") => image = Some(arg.clone()),
            _ => usage(&format!("unexpected argument {}", arg)),
        }
    }
    let image = match image {
        Some(image) => image,
        None => usage("missing program image"),
    };
    let memory = load_image(&image);
    let mut runtime = Runtime::new(memory, config, Box::new(StderrLog::new()));
    if let Some(name) = snapshot {
        match Snapshot::load(&runtime.config().snapshot_dir, &name) {
            Ok(snapshot) => runtime.restore(snapshot),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
    term::main(runtime);
}

fn disassemble(args: &[String]) {
    let image = match args.first() {
        Some(image) => image,
        None => usage("missing program image"),
    };
    let start = number(args.get(1), 0);
    let count = number(args.get(2), 100);
    let memory = load_image(image);
    for line in Listing::new(&memory).lines(start, count) {
        println!("{}", line);
    }
}

fn load_image(path: &str) -> Memory {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: failed to read program image {}: {}", path, e);
            process::exit(1);
        }
    };
    match Memory::from_bytes(&bytes) {
        Ok(memory) => memory,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn value(arg: Option<&String>, flag: &str) -> String {
    match arg {
        Some(v) => v.clone(),
        None => usage(&format!("{} needs a value", flag)),
    }
}

fn number(arg: Option<&String>, default: usize) -> usize {
    match arg {
        Some(s) => match s.parse() {
            Ok(n) => n,
            Err(_) => usage(&format!("not a number: {}", s)),
        },
        None => default,
    }
}

fn usage(problem: &str) -> ! {
    eprintln!("Error: {}", problem);
    eprintln!("Usage: synacor <image> [--load NAME] [--dir PATH] [--sentinel CHAR] [--trace]");
    eprintln!("       synacor --disassemble <image> [START=0] [COUNT=100]");
    process::exit(1);
}
