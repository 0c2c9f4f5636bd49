//! End-to-end analysis properties.
//!
//! Exercises the public `ConceptMapper` surface against a small but
//! realistic curriculum: alias resolution, classification priority,
//! cap invariants, and the disjointness guarantees of gap inference.

use mentor_core::*;

fn resource(title: &str, url: &str, source: Source) -> Resource {
    Resource {
        title: title.to_string(),
        url: url.to_string(),
        source,
    }
}

fn curriculum() -> Curriculum {
    Curriculum {
        title: "DSA Curriculum".to_string(),
        learning_paths: vec![LearningPath {
            path_name: "Beginner DSA Path".to_string(),
            topics: vec!["arrays".to_string(), "sorting_algorithms".to_string()],
        }],
        topics: vec![
            Topic {
                name: "arrays".to_string(),
                display_name: "Array Fundamentals".to_string(),
                subtopics: vec![
                    "array creation".to_string(),
                    "array insertion".to_string(),
                    "array deletion".to_string(),
                    "array traversal".to_string(),
                ],
                resources: vec![
                    resource(
                        "Array Creation in C",
                        "https://example.com/arrays/creation",
                        Source::GeeksForGeeks,
                    ),
                    resource(
                        "Array Insertion and Deletion",
                        "https://example.com/arrays/insert-delete",
                        Source::W3Schools,
                    ),
                ],
            },
            Topic {
                name: "trees".to_string(),
                display_name: "Trees".to_string(),
                subtopics: vec![
                    "binary tree".to_string(),
                    "binary search tree".to_string(),
                    "tree traversal".to_string(),
                    "tree height".to_string(),
                    "balanced tree".to_string(),
                    "avl tree".to_string(),
                ],
                resources: vec![
                    resource(
                        "Binary Search Tree Explained",
                        "https://example.com/trees/bst",
                        Source::GeeksForGeeks,
                    ),
                ],
            },
            Topic {
                name: "sorting_algorithms".to_string(),
                display_name: "Sorting Algorithms".to_string(),
                subtopics: vec![
                    "bubble sort".to_string(),
                    "quick sort".to_string(),
                    "merge sort".to_string(),
                ],
                resources: vec![
                    resource(
                        "Quick Sort Walkthrough",
                        "https://example.com/sorting/quick",
                        Source::StackOverflow,
                    ),
                    resource(
                        "Merge Sort Walkthrough",
                        "https://example.com/sorting/merge",
                        Source::StackOverflow,
                    ),
                ],
            },
        ],
    }
}

fn mapper() -> ConceptMapper {
    ConceptMapper::new(&curriculum())
}

/// All three alias forms of a topic resolve to the same record content.
#[test]
fn test_index_aliasing_is_idempotent() {
    let mapper = mapper();
    let index = mapper.index();

    let canonical = index.get("sorting_algorithms").unwrap();
    let spaced = index.get("sorting algorithms").unwrap();

    assert_eq!(canonical, spaced);

    let canonical = index.get("arrays").unwrap();
    let display = index.get("array fundamentals").unwrap();
    assert_eq!(canonical, display);
}

/// A query textually matching both a definition and a comparison
/// pattern classifies as definition: that category is declared first.
#[test]
fn test_definition_declared_before_comparison() {
    let analysis = mapper().analyze("what is the difference between stack and queue");
    assert_eq!(analysis.query_type, QueryIntent::Definition);
}

/// Exact-match extraction through a definition pattern.
#[test]
fn test_definition_query_extracts_exact_concept() {
    let analysis = mapper().analyze("what is binary search tree");
    assert_eq!(analysis.query_type, QueryIntent::Definition);
    assert_eq!(analysis.extracted_concepts, vec!["binary search tree"]);
}

/// related_concepts is capped at 5 and never overlaps extracted ones.
#[test]
fn test_related_concept_caps() {
    let analysis = mapper().analyze("trees overview and binary tree basics");
    assert!(analysis.related_concepts.len() <= 5);
    for concept in &analysis.related_concepts {
        assert!(!analysis.extracted_concepts.contains(concept));
    }
}

/// resources is capped at 10 with no duplicate non-empty urls.
#[test]
fn test_resource_caps() {
    let analysis = mapper().analyze("arrays and trees and sorting algorithms");
    assert!(analysis.resources.len() <= 10);

    let urls: Vec<&str> = analysis
        .resources
        .iter()
        .map(|r| r.url.as_str())
        .filter(|u| !u.is_empty())
        .collect();
    let mut deduped = urls.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(urls.len(), deduped.len());
}

/// Word-overlap fallback: "quicksort" as one token does not match the
/// key word "quick", while the whole token "sort" does match the sort
/// subtopic keys.
#[test]
fn test_word_overlap_tokenization_rule() {
    let mapper = mapper();

    let fused = mapper.analyze("quicksort walkthrough please");
    assert_eq!(fused.query_type, QueryIntent::General);
    assert!(fused.extracted_concepts.is_empty());

    let tokenized = mapper.analyze("best way to sort numbers");
    assert!(tokenized
        .extracted_concepts
        .contains(&"quick sort".to_string()));
    assert!(tokenized
        .extracted_concepts
        .contains(&"merge sort".to_string()));
}

/// Prerequisites are exactly the subtopics declared before the matched
/// one, never later ones.
#[test]
fn test_prerequisite_ordering() {
    let result = mapper().identify_knowledge_gaps("explain array deletion");

    let mut prerequisites = result.prerequisite_concepts.clone();
    prerequisites.sort_unstable();
    assert_eq!(prerequisites, vec!["array creation", "array insertion"]);
    assert!(!result
        .prerequisite_concepts
        .contains(&"array traversal".to_string()));
}

/// Extracted, prerequisite, and gap sets are pairwise disjoint.
#[test]
fn test_gap_sets_pairwise_disjoint() {
    let queries = [
        "explain array deletion",
        "what is binary search tree",
        "how to implement merge sort",
        "define tree traversal",
    ];

    for query in queries {
        let result = mapper().identify_knowledge_gaps(query);
        let extracted = &result.query_analysis.extracted_concepts;

        for prereq in &result.prerequisite_concepts {
            assert!(!extracted.contains(prereq), "query: {query}");
            assert!(!result.knowledge_gaps.contains(prereq), "query: {query}");
        }
        for gap in &result.knowledge_gaps {
            assert!(!extracted.contains(gap), "query: {query}");
        }
    }
}

/// Matching a subtopic surfaces the topic's curated advanced concepts,
/// minus anything the query already covered.
#[test]
fn test_advanced_concepts_exclude_extracted() {
    let result = mapper().identify_knowledge_gaps("what is binary search tree");
    // "binary search tree" is on trees' advanced list but was extracted,
    // so only "balanced tree" remains.
    assert_eq!(result.knowledge_gaps, vec!["balanced tree"]);
}

/// Comparison queries carry both concept slots through extraction.
#[test]
fn test_comparison_query_resolves_both_concepts() {
    let analysis = mapper().analyze("difference between quick sort and merge sort");
    assert_eq!(analysis.query_type, QueryIntent::Comparison);
    assert_eq!(analysis.extracted_concepts, vec!["quick sort", "merge sort"]);
    assert!(analysis
        .resources
        .iter()
        .any(|r| r.concept == "quick sort"));
    assert!(analysis
        .resources
        .iter()
        .any(|r| r.concept == "merge sort"));
}

/// Every query produces a structured result, even against an empty
/// curriculum.
#[test]
fn test_total_availability_on_empty_curriculum() {
    let mapper = ConceptMapper::new(&Curriculum::default());
    let result = mapper.identify_knowledge_gaps("some entirely unknown request");

    assert_eq!(result.query_analysis.query_type, QueryIntent::General);
    assert!(result.query_analysis.extracted_concepts.is_empty());
    assert!(result.prerequisite_concepts.is_empty());
    assert!(result.knowledge_gaps.is_empty());
    assert!(result.gap_resources.is_empty());
}

/// Analysis results serialize to JSON for downstream consumers.
#[test]
fn test_analysis_serializes_to_json() {
    let analysis = mapper().analyze("what is binary search tree");
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["query_type"], "definition");
    assert_eq!(json["extracted_concepts"][0], "binary search tree");
}
