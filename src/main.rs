// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::io::ErrorKind;
use std::process::ExitCode;

use lexopt::prelude::*;

use posixbox::libc::uname;
use posixbox::logger::{Level, Logger};
use posixbox::uname::{print_uname, Fields};

#[derive(Debug)]
struct Args {
    fields: Fields,
    log_level: Level,
}

fn print_help() {
    let executable = std::env::args().next().unwrap();
    println!(
        "Usage:
    {executable} [-amnrsv]

Optional arguments:
  -a             Print all of the fields below.
  -m             Print the machine hardware name.
  -n             Print the network node hostname.
  -r             Print the operating system release.
  -s             Print the operating system name (default).
  -v             Print the operating system version.
  --debug        Debug output
  -h, --help     print help message
  -V, --version  print version number and exit",
    );
}

fn print_version() {
    let name = std::option_env!("CARGO_BIN_NAME").unwrap();
    let version = std::option_env!("CARGO_PKG_VERSION").unwrap();
    println!("{} {}", name, version);
}

fn parse_args() -> Result<Args, lexopt::Error> {
    let mut fields = Fields::default();
    let mut log_level = Level::Warning;
    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('a') => {
                fields = Fields::all();
            }
            Long("debug") => {
                log_level = Level::Debug;
            }
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('m') => {
                fields.machine = true;
            }
            Short('n') => {
                fields.nodename = true;
            }
            Short('r') => {
                fields.release = true;
            }
            Short('s') => {
                fields.sysname = true;
            }
            Short('v') => {
                fields.version = true;
            }
            Short('V') | Long("version") => {
                print_version();
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    if !fields.any() {
        fields.sysname = true;
    }

    Ok(Args { fields, log_level })
}

fn main() -> ExitCode {
    let executable = std::env::args().next().unwrap();
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: Error: {}", executable, e);
            return ExitCode::from(2);
        }
    };

    let uts = match uname() {
        Ok(u) => u,
        Err(e) => {
            eprintln!("{}: Error: uname failed: {}", executable, e);
            return ExitCode::FAILURE;
        }
    };

    let mut logger = Logger::new_stderr(args.log_level);
    let mut stdout = std::io::stdout();
    if let Err(e) = print_uname(&uts, &args.fields, &mut stdout, &mut logger) {
        match e.kind() {
            ErrorKind::BrokenPipe => {}
            _ => {
                eprintln!(
                    "{}: Error: Failed to print system information: {}",
                    executable, e
                );
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
