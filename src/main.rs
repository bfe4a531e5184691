use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use memoiry::app::AppEnvironment;
use memoiry::game::DeckSource;
use memoiry::runtime::{Runtime, SystemClock};
use memoiry::storage::{FileStorage, Storage, StorageKey};
use memoiry::ui;

#[derive(Debug, Parser)]
#[command(name = "memoiry", about = "A memory-matching card game for the terminal")]
struct Args {
    /// Remove the persisted game backup before starting.
    #[arg(long)]
    reset_backup: bool,

    /// Remove the persisted configuration before starting.
    #[arg(long)]
    reset_configuration: bool,

    /// Deal cards in declaration order instead of shuffling. Used by
    /// automation to get a predictable board.
    #[arg(long)]
    deterministic_deck: bool,

    /// Override the data directory used for saves and logs.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(FileStorage::default_dir);
    init_logging(&data_dir)?;
    tracing::info!(dir = %data_dir.display(), "starting");

    let storage = FileStorage::new(data_dir);
    if args.reset_backup {
        storage
            .remove(StorageKey::GameBackup)
            .context("failed to reset game backup")?;
    }
    if args.reset_configuration {
        storage
            .remove(StorageKey::Configuration)
            .context("failed to reset configuration")?;
    }

    let env = AppEnvironment {
        deck: if args.deterministic_deck {
            DeckSource::Sequential
        } else {
            DeckSource::Shuffled
        },
        ..AppEnvironment::default()
    };

    let mut runtime = Runtime::new(storage, env, SystemClock);
    runtime.bootstrap();
    ui::run::run(ui::app::App::new(runtime)).context("terminal UI failed")
}

/// Log to a file under the data directory; stdout belongs to the TUI.
fn init_logging(dir: &std::path::Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let file = File::create(dir.join("memoiry.log"))
        .with_context(|| format!("failed to open log file in {}", dir.display()))?;
    let writer = Arc::new(Mutex::new(file));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || LogWriter(Arc::clone(&writer)))
        .init();
    Ok(())
}

struct LogWriter(Arc<Mutex<File>>);

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().flush()
    }
}
