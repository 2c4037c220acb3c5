//! Chapter lists and chapter-relative seeking.
//!
//! A [`Chapters`] value is built once from some source (a text listing, a
//! JSON file, or explicit start times) and never changes afterwards. The
//! [`ChapterNavigator`] only ever sees its boundary slice.

mod navigator;
mod parse;

pub use navigator::{
    next_boundary, previous_boundary, ChapterNavigator, RESTART_WINDOW_SECS, SNAP_BACK_SECS,
};
pub use parse::{format_timestamp, parse_timestamp};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while building a chapter list.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    #[error("Chapter {index} has a non-finite start time")]
    NonFinite { index: usize },

    #[error("Chapter {index} starts at a negative time ({start})")]
    Negative { index: usize, start: f64 },

    #[error("Chapter {index} starts at {start}, not after the previous chapter at {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        start: f64,
    },

    #[error("Line {line}: expected '[H:]MM:SS label', got '{content}'")]
    InvalidLine { line: usize, content: String },

    #[error("Invalid chapter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read chapters from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A labeled chapter starting at `start` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub start: f64,
    #[serde(default)]
    pub label: String,
}

impl Chapter {
    pub fn new(start: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            label: label.into(),
        }
    }
}

/// Immutable, validated chapter list with strictly increasing starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chapters {
    chapters: Vec<Chapter>,
    boundaries: Vec<f64>,
}

impl Chapters {
    /// Validate and wrap a chapter list.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, ChapterError> {
        let mut previous: Option<f64> = None;
        for (index, chapter) in chapters.iter().enumerate() {
            let start = chapter.start;
            if !start.is_finite() {
                return Err(ChapterError::NonFinite { index });
            }
            if start < 0.0 {
                return Err(ChapterError::Negative { index, start });
            }
            if let Some(previous) = previous {
                if start <= previous {
                    return Err(ChapterError::NotIncreasing {
                        index,
                        previous,
                        start,
                    });
                }
            }
            previous = Some(start);
        }

        let boundaries = chapters.iter().map(|c| c.start).collect();
        Ok(Self {
            chapters,
            boundaries,
        })
    }

    /// Build from bare start times, labeling chapters by position.
    pub fn from_boundaries(boundaries: &[f64]) -> Result<Self, ChapterError> {
        let chapters = boundaries
            .iter()
            .enumerate()
            .map(|(i, &start)| Chapter::new(start, format!("Chapter {}", i + 1)))
            .collect();
        Self::new(chapters)
    }

    /// Parse a JSON array of `{ "start": secs, "label": "..." }` objects.
    pub fn from_json(json: &str) -> Result<Self, ChapterError> {
        let chapters: Vec<Chapter> = serde_json::from_str(json)?;
        Self::new(chapters)
    }

    /// Load chapters from a file. `.json` files are read as JSON, anything
    /// else as a text listing.
    pub fn load(path: &Path) -> Result<Self, ChapterError> {
        let content = fs::read_to_string(path).map_err(|source| ChapterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::parse_text(&content)
        }
    }

    /// Chapter start times, strictly increasing.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapter containing `time`: the last one starting at or before it.
    pub fn chapter_at(&self, time: f64) -> Option<&Chapter> {
        let after = self.boundaries.partition_point(|&b| b <= time);
        after.checked_sub(1).map(|idx| &self.chapters[idx])
    }
}

impl<'a> IntoIterator for &'a Chapters {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}
