use std::fs;

use boredcalc::{
    Environment, Reply, Session,
    error::CalcResult,
    util::logger::{self, LogLevel},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

/// boredcalc is an interactive calculator with variables, constants and
/// built-in functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boredcalc to read lines from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Logs substitutions and assignments.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only logs warnings, hiding exact factorial results.
    #[arg(short, long)]
    quiet: bool,

    /// Starts without the PI, E and G constants.
    #[arg(long)]
    no_constants: bool,

    /// Lines to run. Starts an interactive session when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    logger::init(if args.verbose {
                     LogLevel::Debug
                 } else if args.quiet {
                     LogLevel::Warn
                 } else {
                     LogLevel::Info
                 });

    let mut session = if args.no_constants {
        Session::with_environment(Environment::empty())
    } else {
        Session::new()
    };

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };
            run_script(&mut session, &script);
        },
        None => run_interactive(&mut session),
    }
}

/// Runs every line of `script`, stopping early at `exit`.
fn run_script(session: &mut Session, script: &str) {
    for line in script.lines() {
        if !report(session.run_line(line)) {
            break;
        }
    }
}

/// Reads lines from the terminal until `exit`, Ctrl-C or Ctrl-D.
fn run_interactive(session: &mut Session) {
    println!("Bored Calculator - The same Haskell calculator, but even worse (somehow)");
    println!("Type 'help' for instructions or 'exit' to quit.");

    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to start the line editor: {e}");
                                             std::process::exit(1);
                                         });

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    debug!("history entry dropped: {e}");
                }
                if !report(session.run_line(&line)) {
                    break;
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("{}", Reply::Exit);
                break;
            },
            Err(e) => {
                eprintln!("Error - {e}");
                break;
            },
        }
    }
}

/// Prints the outcome of one line. Returns `false` once the session should
/// stop.
fn report(outcome: CalcResult<Reply>) -> bool {
    match outcome {
        Ok(Reply::Empty) => true,
        Ok(reply) => {
            println!("{reply}");
            reply != Reply::Exit
        },
        Err(e) => {
            if let Some(cause) = e.cause() {
                debug!("{cause}");
            }
            println!("Error - {e}");
            true
        },
    }
}
