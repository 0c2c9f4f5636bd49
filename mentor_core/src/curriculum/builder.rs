//! Structuring step: raw per-source records into a curriculum document.
//!
//! Upstream acquisition produces one record per fetched page: a title, a
//! url, a provenance tag and whatever free-text subtopic strings were
//! found on the page. This builder matches those strings against a
//! curated per-topic vocabulary, backfills a small set of essential
//! subtopics so every topic stays teachable even from thin source data,
//! and assembles the consolidated document with the default learning
//! paths.
//!
//! Matching here is the same rule the rest of the engine uses:
//! case-insensitive substring, no stemming.

use serde::{Deserialize, Serialize};

use super::{Curriculum, LearningPath, Resource, Source, Topic};

/// One raw record emitted by the acquisition pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: String,
    pub url: String,
    pub source: Source,
    /// Free-text subtopic strings found on the page. May be empty, in
    /// which case the title is matched instead.
    pub subtopics: Vec<String>,
}

/// Curated subtopic vocabulary per topic, in teaching order.
const TOPIC_VOCABULARY: &[(&str, &[&str])] = &[
    ("arrays", &[
        "array creation", "array initialization", "array traversal",
        "array insertion", "array deletion", "array searching",
        "array sorting", "multidimensional arrays", "array complexity",
        "array applications", "array manipulation", "array slicing",
        "array rotation", "subarray", "array size",
    ]),
    ("linked_lists", &[
        "singly linked list", "doubly linked list", "circular linked list",
        "linked list traversal", "linked list insertion", "linked list deletion",
        "linked list searching", "linked list reversal", "linked list complexity",
        "linked list applications", "node structure", "pointer manipulation",
    ]),
    ("stacks", &[
        "stack operations", "push operation", "pop operation", "peek operation",
        "stack implementation", "stack applications", "stack using array",
        "stack using linked list", "stack complexity", "balanced parentheses",
        "expression evaluation", "infix to postfix", "stack overflow", "stack underflow",
    ]),
    ("queues", &[
        "queue operations", "enqueue operation", "dequeue operation",
        "queue implementation", "queue using array", "queue using linked list",
        "circular queue", "priority queue", "double ended queue", "deque",
        "queue applications", "queue complexity", "queue overflow", "queue underflow",
    ]),
    ("trees", &[
        "binary tree", "binary search tree", "tree traversal", "inorder traversal",
        "preorder traversal", "postorder traversal", "level order traversal",
        "tree height", "tree depth", "balanced tree", "avl tree", "red black tree",
        "b-tree", "tree insertion", "tree deletion", "tree searching", "tree complexity",
    ]),
    ("graphs", &[
        "graph representation", "adjacency matrix", "adjacency list",
        "graph traversal", "breadth first search", "depth first search",
        "graph applications", "shortest path", "minimum spanning tree",
        "topological sort", "graph coloring", "graph complexity",
        "directed graph", "undirected graph", "weighted graph", "unweighted graph",
    ]),
    ("hash_tables", &[
        "hash function", "collision resolution", "chaining", "open addressing",
        "linear probing", "quadratic probing", "double hashing", "rehashing",
        "load factor", "hash table complexity", "hash table applications",
        "hash map implementation", "hash set implementation",
    ]),
    ("sorting_algorithms", &[
        "bubble sort", "selection sort", "insertion sort", "merge sort",
        "quick sort", "heap sort", "counting sort", "radix sort", "bucket sort",
        "sorting complexity", "stable sorting", "in-place sorting", "external sorting",
        "sorting comparison", "adaptive sorting", "hybrid sorting algorithms",
    ]),
    ("searching_algorithms", &[
        "linear search", "binary search", "interpolation search", "jump search",
        "exponential search", "fibonacci search", "searching complexity",
        "searching comparison", "searching applications",
    ]),
    ("dynamic_programming", &[
        "memoization", "tabulation", "top-down approach", "bottom-up approach",
        "optimal substructure", "overlapping subproblems", "fibonacci sequence",
        "knapsack problem", "longest common subsequence", "edit distance",
        "dynamic programming applications", "dynamic programming complexity",
    ]),
    ("recursion", &[
        "base case", "recursive case", "recursive function", "recursion tree",
        "tail recursion", "head recursion", "nested recursion", "indirect recursion",
        "recursion complexity", "recursion vs iteration", "stack overflow",
        "recursive backtracking", "memoization in recursion",
    ]),
];

/// Subtopics that must be present for a topic even when no source
/// mentions them.
const ESSENTIAL_SUBTOPICS: &[(&str, &[&str])] = &[
    ("arrays", &["array creation", "array insertion", "array deletion", "array traversal"]),
    ("linked_lists", &["singly linked list", "doubly linked list", "linked list insertion", "linked list deletion"]),
    ("stacks", &["push operation", "pop operation", "peek operation"]),
    ("queues", &["enqueue operation", "dequeue operation"]),
    ("trees", &["binary tree", "tree traversal"]),
    ("graphs", &["graph representation", "graph traversal"]),
    ("hash_tables", &["hash function", "collision resolution"]),
    ("sorting_algorithms", &["bubble sort", "quick sort", "merge sort"]),
    ("searching_algorithms", &["linear search", "binary search"]),
    ("dynamic_programming", &["memoization", "tabulation"]),
    ("recursion", &["base case", "recursive case"]),
];

/// Default learning paths attached to every built curriculum.
const LEARNING_PATHS: &[(&str, &[&str])] = &[
    ("Beginner DSA Path", &[
        "arrays", "linked_lists", "stacks", "queues", "recursion",
        "searching_algorithms", "sorting_algorithms",
    ]),
    ("Intermediate DSA Path", &["trees", "hash_tables", "dynamic_programming"]),
    ("Advanced DSA Path", &["graphs", "advanced_algorithms"]),
];

fn lookup<'a>(table: &[(&str, &'a [&'a str])], topic: &str) -> &'a [&'a str] {
    table
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// Turns a canonical snake-form name into a human label, e.g.
/// `linked_lists` into "Linked Lists".
fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assembles curriculum documents from raw acquisition records.
#[derive(Clone, Debug)]
pub struct CurriculumBuilder {
    title: String,
}

impl Default for CurriculumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self {
            title: "Data Structures and Algorithms Curriculum".to_string(),
        }
    }

    /// Overrides the document title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Structures one topic from its raw records.
    ///
    /// Subtopics are collected first-seen-ordered without duplicates:
    /// every vocabulary term mentioned by a record's subtopic strings
    /// (or by its title, when the record carries no subtopic strings)
    /// is kept, then missing essential subtopics are appended. Every
    /// record is carried over as a resource.
    pub fn structure_topic(&self, name: &str, records: &[RawRecord]) -> Topic {
        let vocabulary = lookup(TOPIC_VOCABULARY, name);
        let mut subtopics: Vec<String> = Vec::new();
        let mut resources = Vec::with_capacity(records.len());

        for record in records {
            resources.push(Resource {
                title: record.title.clone(),
                url: record.url.clone(),
                source: record.source,
            });

            if record.subtopics.is_empty() {
                collect_mentions(&record.title, vocabulary, &mut subtopics);
            } else {
                for text in &record.subtopics {
                    collect_mentions(text, vocabulary, &mut subtopics);
                }
            }
        }

        for essential in lookup(ESSENTIAL_SUBTOPICS, name) {
            if !subtopics.iter().any(|s| s == essential) {
                subtopics.push((*essential).to_string());
            }
        }

        tracing::debug!(
            "structured topic {}: {} subtopics, {} resources",
            name,
            subtopics.len(),
            resources.len()
        );

        Topic {
            name: name.to_string(),
            display_name: humanize(name),
            subtopics,
            resources,
        }
    }

    /// Builds the consolidated curriculum from per-topic record sets.
    pub fn build(&self, topic_records: &[(String, Vec<RawRecord>)]) -> Curriculum {
        let topics = topic_records
            .iter()
            .map(|(name, records)| self.structure_topic(name, records))
            .collect();

        let learning_paths = LEARNING_PATHS
            .iter()
            .map(|(path_name, topics)| LearningPath {
                path_name: (*path_name).to_string(),
                topics: topics.iter().map(|t| (*t).to_string()).collect(),
            })
            .collect();

        Curriculum {
            title: self.title.clone(),
            learning_paths,
            topics,
        }
    }
}

/// Appends every vocabulary term mentioned in `text`, skipping terms
/// already collected.
fn collect_mentions(text: &str, vocabulary: &[&str], out: &mut Vec<String>) {
    let text = text.to_lowercase();
    for term in vocabulary {
        if text.contains(*term) && !out.iter().any(|s| s == term) {
            out.push((*term).to_string());
        }
    }
}
