//! Query intent classification.
//!
//! A fixed table of (intent, pattern list) pairs is tried in declaration
//! order; within a category, patterns are tried in order and the first
//! match anywhere in the query wins and stops all further search. Both
//! orders are part of the contract: a query that textually satisfies two
//! categories classifies as the one declared first.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Classified purpose of a learner query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    Definition,
    Comparison,
    Implementation,
    Complexity,
    Application,
    /// No pattern matched.
    General,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::Definition => "definition",
            QueryIntent::Comparison => "comparison",
            QueryIntent::Implementation => "implementation",
            QueryIntent::Complexity => "complexity",
            QueryIntent::Application => "application",
            QueryIntent::General => "general",
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern table in priority order.
///
/// Capture contract: for `Comparison`, group 2 is the first concept and
/// group 3 (when the pattern has one) the second; for every other
/// category the last group carries the concept.
const PATTERNS: &[(QueryIntent, &[&str])] = &[
    (QueryIntent::Definition, &[
        // "an" before "a" so leftmost-first alternation prefers the
        // longer article; the whole article group is optional so
        // "what is binary search tree" still matches.
        r"what is (an|a)?\s*(.+)",
        r"define\s+(.+)",
        r"explain\s+(.+)",
        r"describe\s+(.+)",
    ]),
    (QueryIntent::Comparison, &[
        r"(difference|compare)\s+between\s+(.+)\s+and\s+(.+)",
        r"(.+)\s+vs\s+(.+)",
        r"how\s+does\s+(.+)\s+differ\s+from\s+(.+)",
    ]),
    (QueryIntent::Implementation, &[
        r"how\s+to\s+implement\s+(.+)",
        r"implementation\s+of\s+(.+)",
        r"code\s+for\s+(.+)",
        r"program\s+for\s+(.+)",
    ]),
    (QueryIntent::Complexity, &[
        r"(time|space)\s+complexity\s+of\s+(.+)",
        r"how\s+(efficient|fast)\s+is\s+(.+)",
        r"performance\s+of\s+(.+)",
    ]),
    (QueryIntent::Application, &[
        r"(use|application)\s+of\s+(.+)",
        r"when\s+to\s+use\s+(.+)",
        r"where\s+is\s+(.+)\s+used",
    ]),
];

/// Compiled intent pattern table.
///
/// Compiled once at construction; classification itself is a pure
/// function with no interior state.
#[derive(Clone, Debug)]
pub struct IntentClassifier {
    table: Vec<(QueryIntent, Vec<Regex>)>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        let table = PATTERNS
            .iter()
            .map(|(intent, patterns)| {
                let compiled = patterns
                    .iter()
                    .filter_map(|p| {
                        RegexBuilder::new(p).case_insensitive(true).build().ok()
                    })
                    .collect();
                (*intent, compiled)
            })
            .collect();
        Self { table }
    }

    /// Classifies a trimmed, case-folded query.
    ///
    /// Returns the matched intent and its candidate concept phrases:
    /// two elements for `Comparison` (the second may be empty), one for
    /// the other categories, none for `General`.
    pub fn classify(&self, query: &str) -> (QueryIntent, Vec<String>) {
        for (intent, patterns) in &self.table {
            for pattern in patterns {
                let Some(caps) = pattern.captures(query) else {
                    continue;
                };
                let groups = caps.len() - 1;
                if *intent == QueryIntent::Comparison {
                    if groups >= 2 {
                        let first = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
                        let second = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
                        return (*intent, vec![first.to_string(), second.to_string()]);
                    }
                } else if groups >= 1 {
                    if let Some(last) = caps.get(groups) {
                        return (*intent, vec![last.as_str().trim().to_string()]);
                    }
                }
            }
        }

        (QueryIntent::General, Vec::new())
    }
}
