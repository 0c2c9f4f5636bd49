//! Concept index - flat lookup table over every known concept name form.
//!
//! Records live in an arena; the key map holds handles into it. A topic
//! is registered under up to three aliases (canonical name, space-form,
//! case-folded display name) that all resolve to the same owned record,
//! so iterating the arena never visits an aliased record twice and a
//! lookup through any alias sees identical content.
//!
//! Key iteration order is insertion order (`IndexMap`), which makes the
//! fallback extractor's output deterministic for a given curriculum.

use indexmap::IndexMap;

use crate::curriculum::{Curriculum, Resource};

/// Handle into the index's record arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// Topic record: a top-level curriculum subject.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicEntry {
    /// Canonical snake-form name.
    pub name: String,
    pub display_name: String,
    /// Subtopic display strings in teaching order.
    pub subtopics: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Subtopic record: a concept nested under a topic.
#[derive(Clone, Debug, PartialEq)]
pub struct SubtopicEntry {
    /// Canonical name of the owning topic.
    pub parent_topic: String,
    /// The subtopic string exactly as declared in the curriculum.
    pub display_name: String,
    /// Topic resources whose title mentions this subtopic. This is an
    /// approximate relevance filter, not exact attribution; it may be
    /// empty.
    pub resources: Vec<Resource>,
}

/// One indexed concept record.
#[derive(Clone, Debug, PartialEq)]
pub enum ConceptEntry {
    Topic(TopicEntry),
    Subtopic(SubtopicEntry),
}

impl ConceptEntry {
    /// Resources stored on this record.
    pub fn resources(&self) -> &[Resource] {
        match self {
            ConceptEntry::Topic(t) => &t.resources,
            ConceptEntry::Subtopic(s) => &s.resources,
        }
    }
}

/// Lookup table keyed by every case-folded name form that can refer to
/// a concept.
///
/// Built once from a curriculum document, then read-only: safe to share
/// by reference across threads without synchronization.
#[derive(Clone, Debug, Default)]
pub struct ConceptIndex {
    entries: Vec<ConceptEntry>,
    keys: IndexMap<String, EntryId>,
}

impl ConceptIndex {
    /// Builds the index. A pure function of the document: an empty
    /// curriculum yields an empty index, malformed topics degrade to
    /// whatever name forms they do carry.
    pub fn build(curriculum: &Curriculum) -> Self {
        let mut index = Self::default();

        for topic in &curriculum.topics {
            let display_name = if topic.display_name.is_empty() {
                topic.name.clone()
            } else {
                topic.display_name.clone()
            };

            let id = index.push(ConceptEntry::Topic(TopicEntry {
                name: topic.name.clone(),
                display_name,
                subtopics: topic.subtopics.clone(),
                resources: topic.resources.clone(),
            }));

            // Canonical name plus the alternate forms, all sharing one
            // record. Each alias is only registered when it differs from
            // the forms before it. Empty name forms are never
            // registered: an empty key would substring-match every
            // query.
            if !topic.name.is_empty() {
                index.keys.insert(topic.name.clone(), id);
            }
            let alt_name = topic.name.replace('_', " ");
            if !alt_name.is_empty() && alt_name != topic.name {
                index.keys.insert(alt_name.clone(), id);
            }
            let folded_display = topic.display_name.to_lowercase();
            if !folded_display.is_empty()
                && folded_display != topic.name
                && folded_display != alt_name
            {
                index.keys.insert(folded_display, id);
            }

            for subtopic in &topic.subtopics {
                let key = subtopic.to_lowercase();
                if key.is_empty() {
                    continue;
                }
                let resources = topic
                    .resources
                    .iter()
                    .filter(|r| r.title.to_lowercase().contains(&key))
                    .cloned()
                    .collect();
                let sub_id = index.push(ConceptEntry::Subtopic(SubtopicEntry {
                    parent_topic: topic.name.clone(),
                    display_name: subtopic.clone(),
                    resources,
                }));
                index.keys.insert(key, sub_id);
            }
        }

        tracing::debug!(
            "indexed {} name forms over {} concept records",
            index.keys.len(),
            index.entries.len()
        );
        index
    }

    fn push(&mut self, entry: ConceptEntry) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(entry);
        id
    }

    /// Looks up a concept by any registered name form. Case-folds the
    /// argument so display-form strings resolve too.
    pub fn get(&self, name: &str) -> Option<&ConceptEntry> {
        let id = self.keys.get(&name.to_lowercase())?;
        self.entries.get(id.0)
    }

    /// All registered name forms, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// Number of registered name forms (aliases counted separately).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
