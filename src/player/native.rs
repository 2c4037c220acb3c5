//! Interactive terminal session.
//!
//! Runs a [`SimulatedPlayback`] clock on the alternate screen and feeds
//! keyboard and mouse input through the session dispatcher until the user
//! quits or the media ends.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use tracing::info;

use crate::chapters::Chapters;
use crate::config::Config;
use crate::playback::{PlaybackSink, SimulatedPlayback};
use crate::player::input::{handle_event, WheelAccumulator};
use crate::player::render::{
    render_help_line, render_progress_bar, render_status_line, HELP_ROW, PROGRESS_ROW, STATUS_ROW,
};
use crate::player::state::{InputResult, Session};
use crate::rate::RateController;
use crate::store::{FileStore, KeyValueStore};

/// How long to wait for input before advancing the clock.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// Playback reached the end; carries the final rate.
    Finished { rate: f64 },
    /// The user quit; carries the position and rate at that moment.
    Interrupted { position: f64, rate: f64 },
}

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("Failed to prepare terminal");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Play `duration` seconds of simulated media with the file-backed store.
pub fn play_session(config: &Config, chapters: Chapters, duration: f64) -> Result<PlaybackResult> {
    let store_path = config.store_path()?;
    let store = FileStore::open(&store_path)
        .with_context(|| format!("Failed to open rate store {}", store_path.display()))?;
    play_session_with_store(config, store, chapters, duration)
}

/// Play a session against any store.
pub fn play_session_with_store<S: KeyValueStore>(
    config: &Config,
    store: S,
    chapters: Chapters,
    duration: f64,
) -> Result<PlaybackResult> {
    let controller = RateController::load_with_key(
        store,
        SimulatedPlayback::new(duration),
        config.rate,
        config.storage.key.clone(),
    );
    let mut session = Session::new(controller, chapters, config.chapters);
    let mut wheel = WheelAccumulator::new(config.input.wheel_threshold);

    info!(
        duration,
        chapters = session.chapters().len(),
        rate = session.rate().rate(),
        "starting interactive session"
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut last_tick = Instant::now();
    let mut last_second = -1i64;

    loop {
        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            if handle_event(ev, &mut session, &config.keys, &config.input, &mut wheel)
                == InputResult::Quit
            {
                let result = PlaybackResult::Interrupted {
                    position: session.playback().current_time(),
                    rate: session.rate().rate(),
                };
                info!(?result, "session ended");
                return Ok(result);
            }
        }

        let now = Instant::now();
        session.playback_mut().advance(now - last_tick);
        last_tick = now;

        // Redraw at least once per media second for the clock readout.
        let second = session.playback().current_time().floor() as i64;
        if second != last_second {
            last_second = second;
            session.needs_render = true;
        }

        if session.needs_render {
            render(&mut stdout, &session, config)?;
            session.needs_render = false;
        }

        if session.playback().is_finished() {
            let result = PlaybackResult::Finished {
                rate: session.rate().rate(),
            };
            info!(?result, "session ended");
            return Ok(result);
        }
    }
}

fn render<S: KeyValueStore>(
    stdout: &mut io::Stdout,
    session: &Session<S, SimulatedPlayback>,
    config: &Config,
) -> Result<()> {
    let (width, _) = terminal::size().unwrap_or((80, 24));
    let playback = session.playback();

    render_help_line(stdout, HELP_ROW, &config.keys)?;
    render_status_line(
        stdout,
        STATUS_ROW,
        width,
        &session.display,
        playback.is_paused(),
        session.current_chapter_label(),
    )?;
    render_progress_bar(
        stdout,
        width,
        PROGRESS_ROW,
        playback.current_time(),
        playback.duration(),
        session.chapters().boundaries(),
    )?;
    stdout.flush()?;
    Ok(())
}
