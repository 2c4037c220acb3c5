//! Chapters subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use pacer::chapters::format_timestamp;
use pacer::Chapters;

/// List the chapters parsed from `path`, one per line.
pub fn handle(path: &Path) -> Result<()> {
    let chapters = Chapters::load(path)
        .with_context(|| format!("Failed to load chapters from {}", path.display()))?;

    if chapters.is_empty() {
        println!("No chapters.");
        return Ok(());
    }

    for (i, chapter) in chapters.iter().enumerate() {
        println!(
            "{:>3}  {:>8}  {}",
            i + 1,
            format_timestamp(chapter.start),
            chapter.label
        );
    }
    Ok(())
}
