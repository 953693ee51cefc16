use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use loxa::run;

/// Exit code for a file-mode run that produced at least one diagnostic.
const DATA_ERROR: u8 = 65;

/// loxa reads a small expression language and prints the syntax tree it
/// recognizes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to parse. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    match run(&source) {
        Ok(expression) => {
            println!("{expression}");
            ExitCode::SUCCESS
        },
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
            ExitCode::from(DATA_ERROR)
        },
    }
}

fn run_prompt() -> ExitCode {
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        // Each prompt line is its own source unit; its errors are forgotten.
        match run(line.trim_end_matches(['\r', '\n'])) {
            Ok(expression) => println!("{expression}"),
            Err(diagnostics) => {
                for diagnostic in &diagnostics {
                    eprintln!("{diagnostic}");
                }
            },
        }
    }

    ExitCode::SUCCESS
}
