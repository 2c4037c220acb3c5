use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pacer::Config;

mod commands;

use commands::parse_time_arg;
use commands::rate::RateOp;
use commands::seek::Direction;

#[derive(Parser)]
#[command(name = "pacer")]
#[command(version)]
#[command(about = "Persisted playback-speed control and chapter seeking")]
#[command(long_about = "Persisted playback-speed control and chapter seeking.

The playback rate is kept between configurable bounds (1.00x to 3.00x by
default), changed in 0.05 steps and remembered across sessions.

Chapter files list one chapter per line as '[H:]MM:SS label', or are JSON
arrays of {\"start\": secs, \"label\": \"...\"} objects.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the persisted playback rate
    Rate {
        #[command(subcommand)]
        action: Option<RateAction>,
    },

    /// Print the seek target of a chapter command
    Seek {
        /// Which way to jump
        #[arg(value_enum)]
        direction: Direction,
        /// Chapter file (text listing or .json)
        #[arg(long, short)]
        chapters: PathBuf,
        /// Current position, in seconds or [H:]MM:SS
        #[arg(long, value_parser = parse_time_arg)]
        at: f64,
    },

    /// List the chapters in a chapter file
    Chapters {
        /// Chapter file (text listing or .json)
        file: PathBuf,
    },

    /// Play simulated media interactively
    #[command(long_about = "Play simulated media interactively.

Keys (configurable in [keys]):
  a / d       Slow down / speed up
  s           Reset to 1.00x, press again to restore
  Alt+Left    Previous chapter (restart within 5s goes one further back)
  Alt+Right   Next chapter
  space       Pause
  q, Esc      Quit

Scrolling steps the rate; clicking the rate indicator toggles the reset.")]
    Play {
        /// Chapter file (text listing or .json)
        #[arg(long, short)]
        chapters: Option<PathBuf>,
        /// Media length, in seconds or [H:]MM:SS
        #[arg(long, value_parser = parse_time_arg)]
        duration: f64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum RateAction {
    /// Print the persisted rate (default)
    Show,
    /// Raise the rate by one step
    Up,
    /// Lower the rate by one step
    Down,
    /// Reset to the default rate
    Reset,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Open configuration in editor
    Edit,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pacer", &mut std::io::stdout());
            Ok(())
        }
        Commands::Config { action } => {
            init_tracing(&Config::default(), false);
            match action {
                ConfigAction::Show => commands::config::handle_show(),
                ConfigAction::Path => commands::config::handle_path(),
                ConfigAction::Edit => commands::config::handle_edit(),
            }
        }
        Commands::Rate { action } => {
            let config = Config::load()?;
            init_tracing(&config, false);
            let op = match action.unwrap_or(RateAction::Show) {
                RateAction::Show => RateOp::Show,
                RateAction::Up => RateOp::Up,
                RateAction::Down => RateOp::Down,
                RateAction::Reset => RateOp::Reset,
            };
            commands::rate::handle(&config, op)
        }
        Commands::Seek {
            direction,
            chapters,
            at,
        } => {
            let config = Config::load()?;
            init_tracing(&config, false);
            commands::seek::handle(&config, direction, &chapters, at)
        }
        Commands::Chapters { file } => {
            init_tracing(&Config::load()?, false);
            commands::chapters::handle(&file)
        }
        Commands::Play { chapters, duration } => {
            let config = Config::load()?;
            init_tracing(&config, true);
            commands::play::handle(&config, chapters.as_deref(), duration)
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `log.level`. While the interactive session owns the
/// terminal, logs go to the configured log file instead of stderr.
fn init_tracing(config: &Config, to_file: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = if to_file {
        config.log_path().and_then(|path| {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).ok()?;
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        })
    } else {
        None
    };

    let registry = tracing_subscriber::registry().with(filter);
    match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        // No usable log file while the terminal is in raw mode: stay silent.
        None if to_file => registry.init(),
        None => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
