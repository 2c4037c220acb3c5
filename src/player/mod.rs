//! Input dispatch and the interactive playback session.
//!
//! This is the layer that turns key presses, wheel movement and clicks into
//! [`Command`]s for the rate controller and the chapter navigator, and
//! forwards the results to the playback object and the status display.
//!
//! # Architecture
//!
//! - `state`: [`Session`] plus the shared types ([`Command`], [`Outcome`], [`InputResult`])
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: Status line, key hints and progress bar
//! - `native`: The terminal event loop
//!
//! # Usage
//!
//! ```no_run
//! use pacer::chapters::Chapters;
//! use pacer::player::{play_session, PlaybackResult};
//! use pacer::Config;
//!
//! let config = Config::load().unwrap();
//! let chapters = Chapters::parse_text("0:00 Intro\n1:30 Main\n").unwrap();
//! match play_session(&config, chapters, 300.0).unwrap() {
//!     PlaybackResult::Finished { rate } => println!("Finished at {:.2}x", rate),
//!     PlaybackResult::Interrupted { position, .. } => println!("Stopped at {:.0}s", position),
//! }
//! ```

pub mod input;
mod native;
pub mod render;
pub mod state;

pub use native::{play_session, play_session_with_store, PlaybackResult};
pub use state::{Command, InputResult, Outcome, Session};
