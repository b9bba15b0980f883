//! `labtrack` — terminal UI for tracking subjects and their lab assignments.
//!
//! # Usage
//!
//! ```
//! labtrack
//! labtrack --store ~/study/labtrack.db
//! labtrack --config ~/.config/labtrack/config.toml dump
//! ```

mod app;
mod settings;
mod ui;
mod view;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use labtrack_core::{lab::Lab, store::StudyStore, subject::Subject};
use labtrack_store_sqlite::{SqliteStore, StoreCell};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use settings::{Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "labtrack", version, about = "Track subjects and their labs")]
struct Args {
  /// Path to a TOML config file (store_path, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Store file; overrides `store_path` from the config file.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print every subject with its labs as JSON and exit.
  Dump,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let mut settings = Settings::load(args.config.as_deref())?;
  // CLI flags override the config file, which overrides defaults.
  if let Some(store) = &args.store {
    settings.store_path = expand_tilde(store);
  }

  match args.command {
    Some(Command::Dump) => init_tracing(None)?,
    None => init_tracing(Some(&settings.log_file))?,
  }

  // One store handle for the whole process; failing to open it is fatal.
  ensure_parent(&settings.store_path)?;
  let cell = StoreCell::new(&settings.store_path);
  let store = cell
    .get()
    .await
    .with_context(|| format!("failed to open store at {:?}", cell.path()))?
    .clone();
  tracing::info!(path = %cell.path().display(), "store open");

  match args.command {
    Some(Command::Dump) => dump(&store).await,
    None => run_tui(store).await,
  }
}

/// Log to `log_file` when the TUI owns the terminal, otherwise to stderr.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match log_file {
    Some(path) => {
      ensure_parent(path)?;
      let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    None => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
  }
  Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating directory {}", parent.display()))?;
  }
  Ok(())
}

// ─── Dump ─────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SubjectDump {
  #[serde(flatten)]
  subject: Subject,
  labs:    Vec<Lab>,
}

async fn dump(store: &SqliteStore) -> Result<()> {
  let mut out = Vec::new();
  for subject in store.list_subjects().await? {
    let labs = store.list_labs(subject.id).await?;
    out.push(SubjectDump { subject, labs });
  }
  println!("{}", serde_json::to_string_pretty(&out)?);
  Ok(())
}

// ─── TUI ──────────────────────────────────────────────────────────────────────

async fn run_tui(store: SqliteStore) -> Result<()> {
  let mut app = App::new(store);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Load initial data.
  let load_result = app.load_subjects().await;

  // Run the event loop; restore terminal even on error.
  let run_result = if load_result.is_ok() {
    run_event_loop(&mut terminal, &mut app).await
  } else {
    load_result
  };

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key).await?
    {
      break;
    }
  }

  Ok(())
}
