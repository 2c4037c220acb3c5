//! Key hint line.

use std::io::{self, Write};

use anyhow::Result;

use crate::config::KeyBindings;

/// One-line summary of the active key bindings.
pub fn help_text(bindings: &KeyBindings) -> String {
    format!(
        "{}/{} speed  {} reset  Alt+←/→ chapter  space pause  q quit",
        bindings.slow_down, bindings.speed_up, bindings.reset
    )
}

/// Render the key hint line on `row`, dimmed.
pub fn render_help_line(stdout: &mut io::Stdout, row: u16, bindings: &KeyBindings) -> Result<()> {
    write!(
        stdout,
        "\x1b[{};1H\x1b[2K\x1b[90m{}\x1b[0m",
        row + 1,
        help_text(bindings)
    )?;
    Ok(())
}
