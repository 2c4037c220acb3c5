//! Play subcommand handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use pacer::chapters::format_timestamp;
use pacer::player::{play_session, PlaybackResult};
use pacer::{Chapters, Config};

/// Run an interactive session over `duration` seconds of simulated media.
pub fn handle(config: &Config, chapters_path: Option<&Path>, duration: f64) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("`pacer play` needs an interactive terminal");
    }

    let chapters = match chapters_path {
        Some(path) => Chapters::load(path)
            .with_context(|| format!("Failed to load chapters from {}", path.display()))?,
        None => Chapters::default(),
    };

    match play_session(config, chapters, duration)? {
        PlaybackResult::Finished { rate } => {
            println!("Finished at {:.2}x", rate);
        }
        PlaybackResult::Interrupted { position, rate } => {
            println!("Stopped at {} ({:.2}x)", format_timestamp(position), rate);
        }
    }
    Ok(())
}
