//! Dotted index paths for requirement items.
//!
//! A [`Level`] is the position of an item inside its document, written as
//! dot-separated 1-based numbers: `1`, `1.2`, `1.2.3`. The last segment is
//! the item's position among its siblings; the preceding segments name the
//! chain of ancestors.
//!
//! A trailing zero marks a heading that stands in for its section
//! (`2.0` sits exactly where `2` would), so trailing zeros are stripped
//! during parsing.
//!
//! ```rust
//! use reqtree_core::Level;
//!
//! let level = Level::parse("1.1.3").unwrap();
//! assert_eq!(level.segments(), &[1, 1, 3]);
//! assert_eq!(level.last(), 3);
//! assert_eq!(level.parent().unwrap().to_string(), "1.1");
//!
//! let heading = Level::parse("1.0").unwrap();
//! assert_eq!(heading, Level::parse("1").unwrap());
//! assert_eq!(heading.as_str(), "1.0");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Separator between index segments.
pub const SEPARATOR: char = '.';

/// A non-empty path of positive, 1-based index segments.
///
/// Equality, ordering, and hashing consider only the normalized segments,
/// so `1.0` and `1` are the same level even though [`Level::as_str`]
/// differs.
#[derive(Clone, Debug)]
pub struct Level {
    segments: Vec<u32>,
    text: String,
}

impl Level {
    /// Parse a dotted index string.
    ///
    /// Segments are trimmed and empty segments are skipped. Trailing zero
    /// segments are removed. Fails with [`Error::InvalidIndex`] when nothing
    /// remains, when a segment is not a number, or when a zero appears before
    /// the end.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let mut segments = Vec::new();
        for part in trimmed.split(SEPARATOR) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let value = part.parse::<u32>().map_err(|_| {
                Error::invalid_index(trimmed, format!("segment '{part}' is not a number"))
            })?;
            segments.push(value);
        }
        Self::normalized(segments, trimmed.to_string())
    }

    /// Build a level from numeric segments.
    pub fn from_segments(segments: impl Into<Vec<u32>>) -> Result<Self> {
        let segments = segments.into();
        let text = join(&segments);
        Self::normalized(segments, text)
    }

    fn normalized(mut segments: Vec<u32>, text: String) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::invalid_index(text, "empty index"));
        }
        while segments.last() == Some(&0) {
            segments.pop();
        }
        if segments.is_empty() {
            return Err(Error::invalid_index(text, "empty index"));
        }
        if segments.contains(&0) {
            return Err(Error::invalid_index(text, "segments are 1-based"));
        }
        Ok(Self { segments, text })
    }

    /// The normalized segments.
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Position among siblings (1-based).
    pub fn last(&self) -> u32 {
        // Non-empty by construction.
        self.segments[self.segments.len() - 1]
    }

    /// The ancestor segments, empty for a top-level level.
    pub fn ancestors(&self) -> &[u32] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The parent level, or `None` at the top level.
    pub fn parent(&self) -> Option<Level> {
        if self.is_top_level() {
            return None;
        }
        let segments = self.ancestors().to_vec();
        let text = join(&segments);
        Some(Self { segments, text })
    }

    /// Returns `true` when this level has a single segment.
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// The dotted text this level was parsed from (trimmed).
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn join(segments: &[u32]) -> String {
    segments
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join(&self.segments))
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments.cmp(&other.segments)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Level::parse(&text).map_err(serde::de::Error::custom)
    }
}
