//! Sibling and child expansion over the topic/subtopic hierarchy.

use indexmap::IndexSet;

use crate::index::{ConceptEntry, ConceptIndex};

/// Hard cap on related concepts per analysis.
pub const MAX_RELATED_CONCEPTS: usize = 5;

/// Expands matched concepts to their neighborhood.
///
/// A topic contributes its subtopics; a subtopic contributes all of its
/// parent topic's subtopics (itself included at this stage - anything
/// already in the input is filtered afterwards). First occurrence wins,
/// output is capped at [`MAX_RELATED_CONCEPTS`]. Concepts absent from
/// the index are skipped without error.
pub fn related_concepts(index: &ConceptIndex, concepts: &[String]) -> Vec<String> {
    let mut related: IndexSet<String> = IndexSet::new();

    for concept in concepts {
        match index.get(concept) {
            Some(ConceptEntry::Topic(topic)) => {
                related.extend(topic.subtopics.iter().cloned());
            }
            Some(ConceptEntry::Subtopic(sub)) => {
                if let Some(ConceptEntry::Topic(parent)) = index.get(&sub.parent_topic) {
                    related.extend(parent.subtopics.iter().cloned());
                }
            }
            None => {}
        }
    }

    related
        .into_iter()
        .filter(|c| !concepts.contains(c))
        .take(MAX_RELATED_CONCEPTS)
        .collect()
}
