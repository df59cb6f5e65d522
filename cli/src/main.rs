//! Polycalc CLI - interactive shell for the polynomial computation service.
//!
//! Thin presentation glue over [`polycalc_engine`]: a line-oriented command
//! loop that stages operands, runs operations against the remote service,
//! and renders the persisted transcript. All session semantics live in the
//! engine; this binary only reads lines and prints entries.

mod render;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use polycalc_engine::{PolycalcConfig, Session, SessionError};
use polycalc_types::Operation;

use render::{print_entry, print_staged, print_transcript};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some((path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "Logging initialized");
        return;
    }

    // Without a log file, keep diagnostics off stdout so they don't mix
    // with the shell's own output.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let dir = PolycalcConfig::path()?.parent()?.join("logs");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("polycalc.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
    Some((path, file))
}

const HELP: &str = "\
Commands:
  add <polynomial>      stage an operand, e.g. add (2x^2) + 3x - 5
  del <n>               remove staged operand Pn
  list                  show staged operands
  suma | resta | multiplicacion | division
                        run the operation on the staged operands
                        (aliases: sum, subtract, product, divide, ...)
  history               show the transcript
  clear                 clear the transcript
  help                  show this help
  quit                  exit";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match PolycalcConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            tracing::warn!("Config load failed: {e}");
            PolycalcConfig::default()
        }
    };

    let mut session = Session::new(config.service_config(), PolycalcConfig::transcript_path());
    let restored = session.restore();

    println!("Calculadora de Polinomios");
    if restored > 0 {
        println!("Loaded {restored} entries from previous session\n");
        print_transcript(session.transcript());
    }
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt(&session);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !handle_line(&mut session, line.trim()).await {
            break;
        }
    }

    Ok(())
}

fn print_prompt(session: &Session) {
    use std::io::Write;
    print!("[{} staged]> ", session.staged().len());
    let _ = std::io::stdout().flush();
}

/// Dispatch one input line. Returns false when the session should end.
async fn handle_line(session: &mut Session, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => println!("{HELP}"),
        "add" => {
            if session.stage_operand(rest) {
                print_staged(session.staged());
            } else {
                println!("Nothing to add; give a polynomial after 'add'.");
            }
        }
        "del" => {
            let removed = rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .is_some_and(|n| session.unstage_operand(n - 1));
            if removed {
                print_staged(session.staged());
            } else {
                println!("No staged operand P{rest}.");
            }
        }
        "list" => print_staged(session.staged()),
        "history" => print_transcript(session.transcript()),
        "clear" => {
            session.clear_transcript();
            println!("Transcript cleared.");
        }
        "run" => run_operation_command(session, rest).await,
        _ => run_operation_command(session, line).await,
    }

    true
}

async fn run_operation_command(session: &mut Session, name: &str) {
    let operation = match Operation::parse(name) {
        Ok(operation) => operation,
        Err(_) => {
            println!("Unknown command {name:?}; type 'help' for commands.");
            return;
        }
    };

    match session.run_operation(operation).await {
        Ok(()) => {
            // Echo the freshly appended Request/Result pair.
            let entries = session.transcript().entries();
            for entry in entries.iter().skip(entries.len().saturating_sub(2)) {
                print_entry(entry);
            }
        }
        Err(SessionError::InsufficientOperands { staged }) => {
            println!("At least 2 polynomials are required to run an operation ({staged} staged).");
        }
        Err(SessionError::RemoteComputationFailed(e)) => {
            // The orphaned request echo stays in the transcript.
            if let Some(entry) = session.transcript().entries().last() {
                print_entry(entry);
            }
            println!("Computation failed: {e}");
            println!("Your operands were consumed; stage them again to retry.");
        }
    }
}
