use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use log::info;
use ratmat::{Interpreter, run_script};

/// ratmat is an interpreter for exact rational and complex linear algebra.
///
/// Without arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run a script file, one statement per line.
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["eval", "script"])]
    file: Option<PathBuf>,

    /// Evaluate a single line and print its value.
    #[arg(short, long, value_name = "LINE", conflicts_with = "script")]
    eval: Option<String>,

    /// Script file to run; the same as `--file`.
    script: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  help           show this help
  exit, quit     leave the session
  file <path>    execute the statements in a file; quote paths with spaces
Syntax:
  NAME = expression
  expression
Examples:
  V1 = [ 1 2 3 ]
  M1 = [ 1 0 0; 0 1 0; 0 0 1 ]
  V2 = M1 * V1
  R = 1 / 3
  V3 = V2 * R
  M2 = T(M1)
  V3
  M2";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut interpreter = Interpreter::new();

    if let Some(line) = args.eval {
        return match interpreter.execute_line(&line) {
            Ok(Some(value)) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Ok(None) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Some(path) = args.file.or(args.script) {
        return match execute_file(&mut interpreter, &path) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = repl(&mut interpreter) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Runs a script file through `run_script`, printing to stdout.
fn execute_file(interpreter: &mut Interpreter, path: &Path) -> io::Result<usize> {
    let script = fs::read_to_string(path).map_err(|e| {
                                              io::Error::new(e.kind(),
                                                             format!("Failed to read the input file '{}': {e}",
                                                                     path.display()))
                                          })?;
    info!("running {}", path.display());

    let stdout = io::stdout();
    run_script(interpreter, &script, &mut stdout.lock())
}

/// Extracts the path of a `file <path>` command, removing surrounding quotes.
fn file_command_path(line: &str) -> Option<PathBuf> {
    let raw = line.strip_prefix("file ")?.trim();
    let raw = raw.strip_prefix('"')
                 .and_then(|r| r.strip_suffix('"'))
                 .unwrap_or(raw);
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

fn repl(interpreter: &mut Interpreter) -> io::Result<()> {
    println!("ratmat {} (type 'help' for help)", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        line.clear();
        print!(">>> ");
        stdout.flush()?;

        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);

        match input.trim() {
            "exit" | "quit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            },
            _ => {},
        }

        if let Some(path) = file_command_path(input.trim()) {
            if let Err(e) = execute_file(interpreter, &path) {
                println!("Error: {e}");
            }
            continue;
        }

        match interpreter.execute_line(input) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
