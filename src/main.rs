use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use rpncalc::{
    calculator::{Action, Calculator},
    evaluate, to_postfix_string,
    util::num::format_number,
};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic expressions with `+ - * / %` and
/// parentheses.
///
/// Without an expression an interactive keypad session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions, one per line, from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression instead of its value.
    #[arg(short, long)]
    postfix: bool,

    /// Logs every evaluation stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let Some(contents) = args.contents else {
        return match interactive() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                           exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut status = ExitCode::SUCCESS;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        let output = if args.postfix {
            to_postfix_string(line)
        } else {
            evaluate(line).map(format_number)
        };
        match output {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}

/// Drives a [`Calculator`] from stdin.
///
/// Each line is either an action name (`equals`, `toggle-sign`, ...), a key
/// name (`Enter`, `Backspace`, `Escape`), `history`, `quit`, or text whose
/// characters are typed one key at a time.
fn interactive() -> io::Result<()> {
    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", calc.display())?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "history" => {
                for entry in calc.history() {
                    writeln!(stdout, "{entry}")?;
                }
                continue;
            },
            _ => {},
        }

        if let Ok(action) = input.parse::<Action>() {
            if let Err(e) = calc.apply(action) {
                eprintln!("{e}");
            }
        } else if !calc.handle_key(input) {
            for c in input.chars().filter(|c| !c.is_whitespace()) {
                if !calc.handle_key(c.encode_utf8(&mut [0; 4])) {
                    eprintln!("Ignored key '{c}'.");
                }
            }
        }
        writeln!(stdout, "{}", calc.display())?;
    }
    Ok(())
}
