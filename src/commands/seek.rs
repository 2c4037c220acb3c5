//! Seek subcommand handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use pacer::chapters::format_timestamp;
use pacer::{Chapters, Config};

/// Chapter seek direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Previous chapter (or restart the current one)
    Prev,
    /// Next chapter
    Next,
}

/// Print the seek target for `direction` at `at` seconds.
///
/// Output is `<seconds>\t<[H:]MM:SS>`.
pub fn handle(config: &Config, direction: Direction, chapters_path: &Path, at: f64) -> Result<()> {
    let chapters = Chapters::load(chapters_path)
        .with_context(|| format!("Failed to load chapters from {}", chapters_path.display()))?;

    if chapters.is_empty() {
        bail!("No chapters in {}", chapters_path.display());
    }

    let navigator = config.chapters;
    let target = match direction {
        Direction::Prev => navigator.previous_boundary(chapters.boundaries(), at),
        Direction::Next => navigator.next_boundary(chapters.boundaries(), at),
    };

    println!("{}\t{}", target, format_timestamp(target));
    Ok(())
}
