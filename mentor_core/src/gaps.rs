//! Knowledge-gap inference.
//!
//! Two independent candidate sets are derived from the concepts a query
//! matched:
//!
//! - prerequisites: subtopics ordered before a matched subtopic in its
//!   parent topic's teaching order;
//! - gaps: a curated list of "advanced" concepts per topic, surfaced
//!   whenever any of that topic's subtopics is matched.
//!
//! Both are insertion-ordered sets, then made disjoint: prerequisites
//! exclude extracted concepts, gaps exclude both. No concept ever
//! appears in more than one of {extracted, prerequisite, gap}.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::index::{ConceptEntry, ConceptIndex};
use crate::resources::{collect_resources, ConceptResource};
use crate::types::QueryAnalysis;

/// Curated advanced concepts per topic. Matching any subtopic of the
/// topic surfaces these as potential gaps. Stacks and queues share one
/// list because their applications are taught together.
const ADVANCED_CONCEPTS: &[(&str, &[&str])] = &[
    ("arrays", &["array searching", "array sorting", "multidimensional arrays"]),
    ("linked_lists", &["doubly linked list", "circular linked list"]),
    ("stacks", &["stack applications", "queue applications"]),
    ("queues", &["stack applications", "queue applications"]),
    ("trees", &["binary search tree", "balanced tree"]),
    ("graphs", &["shortest path", "minimum spanning tree"]),
    ("sorting_algorithms", &["merge sort", "quick sort", "heap sort"]),
    ("searching_algorithms", &["binary search", "hashing"]),
    ("dynamic_programming", &["memoization", "tabulation"]),
];

/// A query analysis extended with prerequisite and gap inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub query_analysis: QueryAnalysis,
    /// Subtopics taught before a matched subtopic that the query did
    /// not mention. Set semantics, deterministic insertion order.
    pub prerequisite_concepts: Vec<String>,
    /// Advanced concepts of the matched topics, minus everything
    /// already covered by the query or the prerequisites.
    pub knowledge_gaps: Vec<String>,
    pub prerequisite_resources: Vec<ConceptResource>,
    pub gap_resources: Vec<ConceptResource>,
}

/// Derives prerequisites and knowledge gaps for an analyzed query.
pub fn infer_gaps(index: &ConceptIndex, analysis: QueryAnalysis) -> GapAnalysis {
    let mut prerequisites: IndexSet<String> = IndexSet::new();
    let mut gaps: IndexSet<String> = IndexSet::new();

    for concept in &analysis.extracted_concepts {
        let Some(ConceptEntry::Subtopic(sub)) = index.get(concept) else {
            continue;
        };

        if let Some(ConceptEntry::Topic(parent)) = index.get(&sub.parent_topic) {
            // Everything positioned before this subtopic in the topic's
            // teaching order is a prerequisite candidate. A display name
            // missing from the order skips derivation without error.
            if let Some(position) = parent
                .subtopics
                .iter()
                .position(|s| *s == sub.display_name)
            {
                prerequisites.extend(parent.subtopics[..position].iter().cloned());
            }
        }

        if let Some((_, advanced)) = ADVANCED_CONCEPTS
            .iter()
            .find(|(topic, _)| *topic == sub.parent_topic)
        {
            gaps.extend(advanced.iter().map(|c| (*c).to_string()));
        }
    }

    let extracted = &analysis.extracted_concepts;
    let prerequisite_concepts: Vec<String> = prerequisites
        .into_iter()
        .filter(|c| !extracted.contains(c))
        .collect();
    let knowledge_gaps: Vec<String> = gaps
        .into_iter()
        .filter(|c| !extracted.contains(c) && !prerequisite_concepts.contains(c))
        .collect();

    let prerequisite_resources = collect_resources(index, &prerequisite_concepts);
    let gap_resources = collect_resources(index, &knowledge_gaps);

    GapAnalysis {
        query_analysis: analysis,
        prerequisite_concepts,
        knowledge_gaps,
        prerequisite_resources,
        gap_resources,
    }
}
