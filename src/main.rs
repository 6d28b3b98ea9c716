//! vtrec - CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vtrec::player::seeking;
use vtrec::session::{self, EventHandler};
use vtrec::{Config, Event, Message, TerminalView};

#[derive(Parser)]
#[command(name = "vtrec")]
#[command(about = "Replay and inspect recorded terminal event logs")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.config/vtrec/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a log to a location and print the screen
    Show {
        /// Path to the event log
        file: PathBuf,
        /// Event index; negative counts from the end
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        index: isize,
        /// Byte offset within the event; negative counts from the end
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        offset: isize,
        /// Also print scrollback history
        #[arg(long)]
        history: bool,
    },

    /// Summarize a log
    Info {
        /// Path to the event log
        file: PathBuf,
    },

    /// List the events in a log
    Events {
        /// Path to the event log
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Show {
            file,
            index,
            offset,
            history,
        } => cmd_show(&config, &file, index, offset, history),
        Commands::Info { file } => cmd_info(&config, &file),
        Commands::Events { file } => cmd_events(&file),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    session::read_file(path).with_context(|| format!("Failed to read event log: {:?}", path))
}

fn cmd_show(config: &Config, path: &Path, index: isize, offset: isize, history: bool) -> Result<()> {
    let events = load_events(path)?;
    let player = config.player();
    for event in events {
        player.process(event)?;
    }
    player.goto(index, offset);

    let location = player.location();
    player.view(|term| {
        if history {
            for line in term.history() {
                println!("{}", line.to_string().trim_end());
            }
            println!("{}", "-".repeat(term.size().0));
        }
        println!("{}", term.text());
        let cursor = term.cursor();
        println!(
            "cursor {},{} at event {} byte {}",
            cursor.x, cursor.y, location.index, location.offset
        );
    });
    Ok(())
}

fn cmd_info(config: &Config, path: &Path) -> Result<()> {
    let events = load_events(path)?;

    let mut outputs = 0;
    let mut bytes = 0;
    let mut resizes = 0;
    let mut size = (config.terminal.cols, config.terminal.rows);
    for event in &events {
        match &event.message {
            Message::Output { data } => {
                outputs += 1;
                bytes += data.len();
            }
            Message::Resize { columns, rows } => {
                resizes += 1;
                size = (*columns, *rows);
            }
        }
    }

    println!("Events:   {}", events.len());
    println!("Output:   {} ({} bytes)", outputs, bytes);
    println!("Resizes:  {}", resizes);
    if let Some((first, last)) = seeking::time_span(&events) {
        println!("Start:    {}", first.to_rfc3339());
        println!("End:      {}", last.to_rfc3339());
        println!(
            "Duration: {:.3}s",
            seeking::duration(&events).num_milliseconds() as f64 / 1000.0
        );
    }
    println!("Size:     {}x{}", size.0, size.1);
    Ok(())
}

fn cmd_events(path: &Path) -> Result<()> {
    let events = load_events(path)?;
    for (i, event) in events.iter().enumerate() {
        let summary = match &event.message {
            Message::Output { data } => format!("output {:?}", String::from_utf8_lossy(data)),
            Message::Resize { columns, rows } => format!("resize {}x{}", columns, rows),
        };
        println!("{:>5}  {}  {}", i, event.stamp.to_rfc3339(), summary);
    }
    Ok(())
}
