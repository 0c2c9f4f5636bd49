//! Curriculum document model and loader.
//!
//! The curriculum is the immutable input the whole engine is built from:
//! an ordered list of topics, each carrying its subtopics in teaching
//! order plus the learning resources collected for it. The on-disk
//! encoding is a JSON document with top-level `title`, `learning_paths`
//! and `topics` keys.
//!
//! Every field decodes with an empty default so a partially-populated
//! document degrades to partial matching instead of aborting.

pub mod builder;

pub use builder::{CurriculumBuilder, RawRecord};

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Provenance of a learning resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    GeeksForGeeks,
    W3Schools,
    StackOverflow,
    /// Catch-all for sources this build does not know about.
    #[serde(other)]
    #[default]
    Unknown,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::GeeksForGeeks => "geeksforgeeks",
            Source::W3Schools => "w3schools",
            Source::StackOverflow => "stackoverflow",
            Source::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single learning resource attached to a topic.
///
/// The `url` is the identity key during deduplication; an empty url
/// means the resource has no stable identity and is never treated as a
/// duplicate of anything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub title: String,
    pub url: String,
    pub source: Source,
}

/// Top-level curriculum subject, e.g. `trees`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    /// Canonical lowercase snake-form identifier, unique per document.
    pub name: String,
    /// Human label, e.g. "Linked Lists".
    pub display_name: String,
    /// Ordered and distinct. The order encodes teaching/prerequisite
    /// order and drives prerequisite derivation.
    pub subtopics: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Named ordered sequence of topic names. Advisory only; the mapping
/// logic does not consume it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPath {
    pub path_name: String,
    pub topics: Vec<String>,
}

/// The full curriculum document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Curriculum {
    pub title: String,
    pub learning_paths: Vec<LearningPath>,
    pub topics: Vec<Topic>,
}

impl Curriculum {
    /// Decodes a curriculum from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let curriculum = serde_json::from_reader(BufReader::new(reader))?;
        Ok(curriculum)
    }

    /// Loads a curriculum document from a JSON file.
    ///
    /// Missing fields decode as empty defaults; an empty document is
    /// valid input and yields an empty concept index downstream.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let curriculum = Self::from_reader(File::open(path)?)?;
        tracing::debug!(
            "loaded curriculum from {}: {} topics",
            path.display(),
            curriculum.topics.len()
        );
        Ok(curriculum)
    }
}
