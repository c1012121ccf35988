//! Reminder runner entry point.
//!
//! # Responsibility
//! - Open the local store, run reminder passes over the persisted to-do
//!   list, and print due reminders to the console.
//! - Provide a quick `--once` mode for a single pass and a polling mode
//!   matching the application's fixed tick period.

use chrono::Utc;
use lifebm_core::reminder::POLL_PERIOD_SECS;
use lifebm_core::store::db::open_db;
use lifebm_core::store::state_store::{SqliteStateStore, StateStore};
use lifebm_core::{default_log_level, init_logging, run_tick, AppState, ConsoleNotifier};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

struct Args {
    db_path: PathBuf,
    once: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut db_path = PathBuf::from("lifebm.db");
    let mut once = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                db_path = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or("--db requires a path argument")?;
            }
            "--once" => once = true,
            "--help" | "-h" => {
                println!(
                    "usage: lifebm [--db <path>] [--once]\n\
                     lifebm_core version={}",
                    lifebm_core::core_version()
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(Args { db_path, once })
}

fn run(args: &Args) -> Result<(), String> {
    let log_dir = std::env::temp_dir().join("lifebm-logs");
    let log_dir = log_dir
        .to_str()
        .ok_or("log directory is not valid UTF-8")?
        .to_string();
    init_logging(default_log_level(), &log_dir)?;

    let conn = open_db(&args.db_path).map_err(|err| err.to_string())?;
    let store = SqliteStateStore::new(&conn);
    let mut state = store
        .load()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();

    let notifier = ConsoleNotifier;
    loop {
        let fired = run_tick(&mut state, Utc::now(), &notifier);
        if fired > 0 {
            store.save(&state).map_err(|err| err.to_string())?;
        }
        if args.once {
            print_summary(&state, fired);
            return Ok(());
        }
        thread::sleep(Duration::from_secs(POLL_PERIOD_SECS));
    }
}

fn print_summary(state: &AppState, fired: usize) {
    let pending = state.todos.iter().filter(|t| !t.completed).count();
    println!("reminders fired: {fired}");
    println!("pending to-dos: {pending} of {}", state.todos.len());
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(message) = run(&args) {
        error!("event=cli_run module=cli status=error error={message}");
        eprintln!("lifebm: {message}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
