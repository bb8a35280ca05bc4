use super::{Address, Word, MODULUS, REGISTER_COUNT};
use crate::error;
use crate::error::Error;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

/// ## Debug channel commands
///
/// One line, whitespace separated, case sensitive.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save(Option<String>),
    Load(Option<String>),
    SetReg(usize, Word),
    BarfReg,
    BarfStack,
    BarfMem(Address, usize),
    Dis(Option<Address>, usize),
    Logging(bool),
}

const BARFMEM_COUNT: usize = 8;
const DIS_COUNT: usize = 10;

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => return Err(error!(UnrecognizedCommand; "EMPTY COMMAND")),
        };
        let args: Vec<&str> = tokens.collect();
        let command = match name {
            "save" => Command::Save(optional_name(&args)?),
            "load" => Command::Load(optional_name(&args)?),
            "setreg" => {
                max_args(&args, 2)?;
                if args.len() < 2 {
                    return Err(error!(BadArgument; "USAGE: setreg <index> <value>"));
                }
                let index: usize = number(args[0])?;
                if index >= REGISTER_COUNT {
                    return Err(error!(BadArgument; &format!("NO REGISTER {}", index)));
                }
                let value: Word = number(args[1])?;
                if value >= MODULUS {
                    return Err(error!(BadArgument; &format!("VALUE {} TOO LARGE", value)));
                }
                Command::SetReg(index, value)
            }
            "barfreg" => {
                max_args(&args, 0)?;
                Command::BarfReg
            }
            "barfstack" => {
                max_args(&args, 0)?;
                Command::BarfStack
            }
            "barfmem" => {
                max_args(&args, 2)?;
                let addr = match args.first() {
                    Some(arg) => number(arg)?,
                    None => return Err(error!(BadArgument; "USAGE: barfmem <address> [count]")),
                };
                let count = match args.get(1) {
                    Some(arg) => number(arg)?,
                    None => BARFMEM_COUNT,
                };
                Command::BarfMem(addr, count)
            }
            "dis" => {
                max_args(&args, 2)?;
                let addr = match args.first() {
                    Some(arg) => Some(number(arg)?),
                    None => None,
                };
                let count = match args.get(1) {
                    Some(arg) => number(arg)?,
                    None => DIS_COUNT,
                };
                Command::Dis(addr, count)
            }
            "logging" => {
                max_args(&args, 1)?;
                match args.first() {
                    Some(&"on") => Command::Logging(true),
                    Some(&"off") => Command::Logging(false),
                    _ => return Err(error!(BadArgument; "USAGE: logging on|off")),
                }
            }
            _ => return Err(error!(UnrecognizedCommand; name)),
        };
        Ok(command)
    }
}

fn optional_name(args: &[&str]) -> Result<Option<String>> {
    max_args(args, 1)?;
    Ok(args.first().map(|name| name.to_string()))
}

fn max_args(args: &[&str], max: usize) -> Result<()> {
    if args.len() > max {
        Err(error!(BadArgument; "TOO MANY ARGUMENTS"))
    } else {
        Ok(())
    }
}

fn number<T: FromStr>(arg: &str) -> Result<T> {
    arg.parse::<T>()
        .map_err(|_| error!(BadArgument; &format!("NOT A NUMBER: {}", arg)))
}
