// Chunk: docs/chunks/headless_host - Command-line host driving a session from key scripts
// Chunk: docs/chunks/ambient_logging - Structured logging setup
//!
//! gap-edit: a small gap buffer text editor with undo/redo.
//!
//! This binary is a headless host for the editing session. It opens the
//! given file, feeds the session a script of keys written in key notation,
//! and reports the final status line on stderr. Saving happens the way it
//! would interactively, through `<C-s>` in the script.
//!
//! ```text
//! gap-edit notes.txt --keys "Hello<Enter>world<C-s>"
//! gap-edit --keys "draft<C-z><C-z>" --print
//! ```

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gap_edit::input::KeyEvent;
use gap_edit::{ConfigError, EditorConfig, EditorSession, PersistenceError};
use gap_edit_input::{parse_key_sequence, ParseKeyError};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;

/// Environment variable holding the log filter, e.g. `GAP_EDIT_LOG=debug`.
const LOG_ENV: &str = "GAP_EDIT_LOG";

/// Width of the status line printed when the script ends.
const STATUS_WIDTH: usize = 80;

/// Errors that stop the host before or while running a script.
#[derive(Debug, Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("invalid key script: {0}")]
    Keys(#[from] ParseKeyError),
    #[error("failed to read key script {}: {source}", .path.display())]
    KeysFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gap-edit: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `GAP_EDIT_LOG` and defaults to `warn`; `--verbose`
/// forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &CliArgs) -> Result<(), HostError> {
    let mut config = match &args.config {
        Some(path) => EditorConfig::load_from(path)?,
        None => EditorConfig::load_default(),
    };
    if let Some(capacity) = args.capacity {
        config.initial_capacity = capacity;
    }
    debug!(?config, "starting session");

    let mut session = EditorSession::new(config);
    if let Some(path) = &args.file {
        session.open(path)?;
    }

    let keys = load_keys(args)?;
    drive(&mut session, keys);

    if session.is_dirty() {
        warn!("exiting with unsaved changes");
    }

    if args.print {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(session.content().as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(HostError::Output)?;
    }
    eprintln!("{}", session.status_line(STATUS_WIDTH));
    Ok(())
}

/// Collects the key script from `--keys` or `--keys-file`.
fn load_keys(args: &CliArgs) -> Result<Vec<KeyEvent>, HostError> {
    let script = match (&args.keys, &args.keys_file) {
        (Some(keys), _) => keys.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|source| HostError::KeysFile {
                path: path.clone(),
                source,
            })?
            .lines()
            .collect(),
        (None, None) => String::new(),
    };
    Ok(parse_key_sequence(&script)?)
}

/// Feeds keys to the session until they run out or the session quits.
fn drive(session: &mut EditorSession, keys: Vec<KeyEvent>) {
    let total = keys.len();
    let mut delivered = 0;
    for event in keys {
        if !session.is_running() {
            break;
        }
        session.handle_key(event);
        delivered += 1;
    }
    info!(delivered, total, running = session.is_running(), "key script finished");
}
