//! Analysis result types.

use serde::{Deserialize, Serialize};

use crate::intent::QueryIntent;
use crate::resources::ConceptResource;

/// Structured result of analyzing one learner query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// The query exactly as submitted.
    pub original_query: String,
    pub query_type: QueryIntent,
    /// Ordered, first-found-wins, no duplicates.
    pub extracted_concepts: Vec<String>,
    /// Ordered, capped at 5, disjoint from `extracted_concepts`.
    pub related_concepts: Vec<String>,
    /// Ordered, capped at 10, no two entries share a non-empty url.
    pub resources: Vec<ConceptResource>,
}
