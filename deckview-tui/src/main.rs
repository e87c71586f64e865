//! deckview TUI: present a slide deck in the terminal.
//!
//! Loop: draw, run due deferred work, poll for input, dispatch.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use deckview_core::{Command, Deck, ViewerConfig};
use deckview_tui::{handle_event, logging, ui, App};

#[derive(Parser)]
#[command(name = "deckview-tui", about = "Terminal slide presenter")]
struct Args {
    /// Deck file (TOML). Defaults to the built-in deck.
    deck: Option<PathBuf>,

    /// Viewer config file. Defaults to <config dir>/deckview/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slide to open on (1-based).
    #[arg(long)]
    start: Option<usize>,

    /// Log file. Defaults to <data dir>/deckview/deckview.log.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show speaker notes under each slide.
    #[arg(long, default_value_t = false)]
    notes: bool,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deckview")
        .join("config.toml")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = ViewerConfig::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    config.show_notes |= args.notes;

    let deck = Deck::load_or_builtin(args.deck.as_deref()).context("failed to load deck")?;
    tracing::info!(
        deck = %deck.meta.title,
        slides = deck.len(),
        log = %log_path.display(),
        "starting presenter"
    );

    let now = Instant::now();
    let mut app = App::new(deck, config, now)?;
    if let Some(start) = args.start {
        if app.navigator.contains(start) {
            app.run(Command::GoTo(start), now);
        } else {
            tracing::warn!(start, total = app.navigator.total(), "start slide out of range");
            app.set_warning(
                format!("No slide {start}; deck has {}", app.navigator.total()),
                now,
            );
        }
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.viewport = Rect::new(0, 0, size.width, size.height);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!(slide = app.navigator.current(), "presenter closed");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick = app.config.tick();
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Deferred work that has come due
        app.tick(Instant::now());

        // 3. Poll for input events, waking early for deferred work
        let timeout = app
            .scheduler()
            .borrow()
            .next_due()
            .map_or(tick, |due| due.saturating_duration_since(Instant::now()).min(tick));
        if event::poll(timeout)? {
            let ev = event::read()?;
            handle_event(app, ev, Instant::now());
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
