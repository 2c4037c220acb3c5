//! Rate subcommands handler
//!
//! One-shot operations against the persisted rate. The reset toggle's saved
//! rate only lives as long as a controller, so `reset` here always goes to the
//! default rate.

use anyhow::{Context, Result};

use pacer::{Config, FileStore, RateController, SimulatedPlayback};

/// Which rate operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOp {
    Show,
    Up,
    Down,
    Reset,
}

/// Apply `op` to the persisted rate and print the result.
pub fn handle(config: &Config, op: RateOp) -> Result<()> {
    let store_path = config.store_path()?;
    let store = FileStore::open(&store_path)
        .with_context(|| format!("Failed to open rate store {}", store_path.display()))?;

    // No media attached; the sink only receives the rate.
    let mut controller = RateController::load_with_key(
        store,
        SimulatedPlayback::new(0.0),
        config.rate,
        config.storage.key.clone(),
    );

    match op {
        RateOp::Show => {}
        RateOp::Up => {
            controller.speed_up();
        }
        RateOp::Down => {
            controller.slow_down();
        }
        RateOp::Reset => {
            controller.reset_toggle();
        }
    }

    println!("{}x", controller.display().label);
    Ok(())
}
