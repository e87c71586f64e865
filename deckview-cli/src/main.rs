//! deckview CLI: print, check and outline slide decks without the TUI.
//!
//! Commands:
//! - `print`: every slide as plain text, one page per slide
//! - `check`: validate a deck file and report what it contains
//! - `outline`: numbered slide titles, as text or JSON

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use deckview_core::print::{render_deck, PrintOptions};
use deckview_core::Deck;

#[derive(Parser)]
#[command(name = "deckview", about = "deckview CLI: slide deck tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every slide as plain text, pages separated by form feeds.
    Print {
        /// Deck file (TOML). Defaults to the built-in deck.
        deck: Option<PathBuf>,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Wrap width in columns.
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Include speaker notes.
        #[arg(long, default_value_t = false)]
        notes: bool,
    },
    /// Validate a deck file.
    Check {
        /// Deck file (TOML).
        deck: PathBuf,
    },
    /// List slide titles in order.
    Outline {
        /// Deck file (TOML). Defaults to the built-in deck.
        deck: Option<PathBuf>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with printed output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            deck,
            output,
            width,
            notes,
        } => run_print(deck.as_deref(), output.as_deref(), width, notes),
        Commands::Check { deck } => run_check(&deck),
        Commands::Outline { deck, json } => run_outline(deck.as_deref(), json),
    }
}

fn load(path: Option<&Path>) -> Result<Deck> {
    Deck::load_or_builtin(path).with_context(|| match path {
        Some(p) => format!("failed to load deck {}", p.display()),
        None => "failed to load built-in deck".to_string(),
    })
}

fn run_print(deck: Option<&Path>, output: Option<&Path>, width: usize, notes: bool) -> Result<()> {
    let deck = load(deck)?;
    let options = PrintOptions {
        width,
        include_notes: notes,
    };
    let text = render_deck(&deck, &options);

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), slides = deck.len(), "wrote print output");
            println!("Wrote {} slides to {}", deck.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let deck = load(Some(path))?;

    println!("Deck:   {}", deck.meta.title);
    if let Some(author) = &deck.meta.author {
        println!("Author: {author}");
    }
    println!("Slides: {}", deck.len());

    let untitled: Vec<usize> = deck
        .slides
        .iter()
        .enumerate()
        .filter(|(_, s)| s.title.as_deref().map_or(true, |t| t.trim().is_empty()))
        .map(|(i, _)| i + 1)
        .collect();
    if !untitled.is_empty() {
        tracing::warn!(?untitled, "slides without a title");
        println!("Untitled slides (announced by number): {untitled:?}");
    }

    let with_notes = deck.slides.iter().filter(|s| s.notes.is_some()).count();
    println!("Slides with notes: {with_notes}");
    println!("OK");
    Ok(())
}

fn run_outline(deck: Option<&Path>, as_json: bool) -> Result<()> {
    let deck = load(deck)?;
    let titles = deck.titles();

    if as_json {
        let slides: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                json!({
                    "index": i + 1,
                    "title": title,
                    "points": deck.slides[i].points.len(),
                })
            })
            .collect();
        let doc = json!({
            "title": deck.meta.title,
            "total": deck.len(),
            "slides": slides,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", deck.meta.title);
        let digits = deck.len().to_string().len();
        for (i, title) in titles.iter().enumerate() {
            println!("{:>digits$}. {title}", i + 1);
        }
    }
    Ok(())
}
