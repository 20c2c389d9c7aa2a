mod actions;
mod app;
mod input;
mod view;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use d5sim_data::{parse_seed, resolve_config, ConfigOverrides};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Terminal front end for the D5 baccarat simulator.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "d5sim-cui", version, about, long_about = None)]
pub struct LaunchOptions {
    /// Seed for the shuffle, decimal or 0x hex.
    #[arg(long, value_parser = seed_arg)]
    pub seed: Option<u64>,

    /// JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Decks per shoe.
    #[arg(long)]
    pub decks: Option<usize>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log: Option<PathBuf>,
}

fn seed_arg(raw: &str) -> Result<u64, String> {
    parse_seed(raw).ok_or_else(|| format!("invalid seed: {raw}"))
}

pub fn run_from_args() -> Result<()> {
    run(LaunchOptions::parse())
}

pub fn run(options: LaunchOptions) -> Result<()> {
    if let Some(path) = options.log.as_ref() {
        init_file_logging(path)?;
    }
    let overrides = ConfigOverrides {
        seed: options.seed,
        deck_count: options.decks,
        ..ConfigOverrides::default()
    };
    let sim = resolve_config(options.config.as_deref(), overrides)?;
    let mut app = App::bootstrap(sim)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log {}", path.display()))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(50);
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = input::map_key(key);
                actions::dispatch(app, action);
            }
        }
        app.on_tick(Instant::now());
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "d5sim-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}
