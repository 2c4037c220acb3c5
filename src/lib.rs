//! pacer - persisted playback-speed control and chapter-relative seeking.
//!
//! The library core is two small components over injected collaborators:
//!
//! - [`RateController`]: bounded, persisted, reversible playback-rate control
//! - [`ChapterNavigator`]: previous/next chapter seek targets with a snap-back
//!   window near chapter starts
//!
//! Both talk to the outside world only through [`PlaybackSink`],
//! [`KeyValueStore`] and an immutable [`Chapters`] list. The [`player`]
//! module wires them to terminal input for the `pacer` binary.

pub mod chapters;
pub mod config;
pub mod playback;
pub mod player;
pub mod rate;
pub mod store;

pub use chapters::{ChapterNavigator, Chapters};
pub use config::Config;
pub use playback::{PlaybackSink, SimulatedPlayback};
pub use rate::{RateController, RateDisplay, RatePolicy};
pub use store::{FileStore, KeyValueStore, MemoryStore};
