//! Mentor - DSA query-to-concept mapping and knowledge-gap inference.
//!
//! This crate maps free-text learner queries about data structures and
//! algorithms onto a curated concept hierarchy: it classifies the
//! query's intent, extracts the concepts it mentions, expands to
//! related concepts, resolves learning resources, and infers which
//! prerequisite or advanced concepts the learner may be missing.
//!
//! Matching is deterministic and rule-based (regex patterns plus
//! substring and whole-token scans); there is no semantic model and no
//! per-user state. The engine is synchronous: the concept index is
//! built once from a curriculum document and is read-only afterwards,
//! so a [`ConceptMapper`] can be shared across threads by reference.
//!
//! # Quick Start
//!
//! ```rust
//! use mentor_core::{ConceptMapper, Curriculum};
//!
//! # fn main() -> mentor_core::Result<()> {
//! let curriculum: Curriculum = serde_json::from_str(r#"{
//!     "topics": [{
//!         "name": "trees",
//!         "display_name": "Trees",
//!         "subtopics": ["binary tree", "binary search tree"],
//!         "resources": []
//!     }]
//! }"#)?;
//!
//! let mapper = ConceptMapper::new(&curriculum);
//! let analysis = mapper.analyze("what is a binary search tree");
//! assert_eq!(analysis.query_type.as_str(), "definition");
//! assert_eq!(analysis.extracted_concepts, vec!["binary search tree"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`curriculum`]: document model, JSON loader, structuring builder
//! - [`index`]: alias-aware concept lookup table
//! - [`intent`]: ordered-pattern intent classification
//! - [`extract`]: fallback concept extraction
//! - [`relations`]: sibling/child expansion
//! - [`resources`]: resource gathering and deduplication
//! - [`gaps`]: prerequisite and knowledge-gap inference

pub mod curriculum;
pub mod error;
pub mod extract;
pub mod gaps;
pub mod index;
pub mod intent;
pub mod relations;
pub mod resources;
pub mod types;

// Re-export commonly used types
pub use curriculum::{Curriculum, CurriculumBuilder, LearningPath, RawRecord, Resource, Source, Topic};
pub use error::{MentorError, Result};
pub use gaps::GapAnalysis;
pub use index::{ConceptEntry, ConceptIndex};
pub use intent::{IntentClassifier, QueryIntent};
pub use resources::ConceptResource;
pub use types::QueryAnalysis;

/// Version of the mentor engine crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main entry point for query analysis.
///
/// Holds the concept index and the compiled intent patterns. Immutable
/// after construction; every query is processed start-to-finish with no
/// shared mutable state, so one mapper serves any number of threads.
#[derive(Clone, Debug)]
pub struct ConceptMapper {
    index: ConceptIndex,
    classifier: IntentClassifier,
}

impl ConceptMapper {
    /// Builds a mapper from an in-memory curriculum document.
    ///
    /// An empty document is valid: every query then classifies against
    /// an empty index and yields empty concept and resource lists.
    pub fn new(curriculum: &Curriculum) -> Self {
        let index = ConceptIndex::build(curriculum);
        tracing::debug!("concept mapper ready: {} name forms", index.len());
        Self {
            index,
            classifier: IntentClassifier::new(),
        }
    }

    /// Loads the curriculum document from a JSON file and builds the
    /// mapper from it.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(&Curriculum::from_path(path)?))
    }

    /// The underlying concept index.
    pub fn index(&self) -> &ConceptIndex {
        &self.index
    }

    /// Analyzes one learner query.
    ///
    /// Classification runs first; when it yields no candidate phrases
    /// the fallback extractor scans the index key set. Related concepts
    /// and resources are then resolved from whatever was extracted.
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        let clean_query = query.to_lowercase();
        let clean_query = clean_query.trim();

        let (query_type, mut extracted_concepts) = self.classifier.classify(clean_query);
        if extracted_concepts.is_empty() {
            extracted_concepts = extract::extract_concepts(&self.index, clean_query);
        }

        let related_concepts = relations::related_concepts(&self.index, &extracted_concepts);
        let resources = resources::collect_resources(&self.index, &extracted_concepts);

        QueryAnalysis {
            original_query: query.to_string(),
            query_type,
            extracted_concepts,
            related_concepts,
            resources,
        }
    }

    /// Analyzes one query and additionally infers prerequisite concepts
    /// and knowledge gaps, with resources for both sets.
    pub fn identify_knowledge_gaps(&self, query: &str) -> GapAnalysis {
        gaps::infer_gaps(&self.index, self.analyze(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Topic;

    fn mapper() -> ConceptMapper {
        ConceptMapper::new(&Curriculum {
            title: String::new(),
            learning_paths: Vec::new(),
            topics: vec![Topic {
                name: "trees".to_string(),
                display_name: "Trees".to_string(),
                subtopics: vec![
                    "binary tree".to_string(),
                    "binary search tree".to_string(),
                    "tree traversal".to_string(),
                ],
                resources: vec![Resource {
                    title: "Binary Search Tree Guide".to_string(),
                    url: "https://example.com/bst".to_string(),
                    source: Source::GeeksForGeeks,
                }],
            }],
        })
    }

    #[test]
    fn test_analyze_preserves_original_query_verbatim() {
        let analysis = mapper().analyze("  What Is A Binary Search Tree  ");
        assert_eq!(analysis.original_query, "  What Is A Binary Search Tree  ");
        assert_eq!(analysis.query_type, QueryIntent::Definition);
    }

    #[test]
    fn test_fallback_extraction_used_for_general_queries() {
        let analysis = mapper().analyze("binary search tree rotations");
        assert_eq!(analysis.query_type, QueryIntent::General);
        assert_eq!(analysis.extracted_concepts, vec!["binary search tree"]);
    }

    #[test]
    fn test_empty_curriculum_still_answers() {
        let mapper = ConceptMapper::new(&Curriculum::default());
        let analysis = mapper.analyze("what is a binary search tree");
        // The classifier still runs; nothing resolves against the
        // empty index.
        assert_eq!(analysis.query_type, QueryIntent::Definition);
        assert!(analysis.related_concepts.is_empty());
        assert!(analysis.resources.is_empty());
    }

    #[test]
    fn test_mapper_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConceptMapper>();
    }
}
