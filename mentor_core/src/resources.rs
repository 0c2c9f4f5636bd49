//! Resource resolution over matched concepts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::curriculum::Source;
use crate::index::ConceptIndex;

/// Hard cap on resources per analysis.
pub const MAX_RESOURCES: usize = 10;

/// A resolved learning resource, tagged with the concept it was reached
/// through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConceptResource {
    pub title: String,
    pub url: String,
    pub source: Source,
    pub concept: String,
}

/// Gathers resources for the given concepts.
///
/// A single physical resource reachable through two concepts enters the
/// running list twice with different tags; deduplication then keeps the
/// first occurrence per non-empty url. Resources without a url have no
/// identity and are all kept. Output is capped at [`MAX_RESOURCES`].
pub fn collect_resources(index: &ConceptIndex, concepts: &[String]) -> Vec<ConceptResource> {
    let mut seen_urls: HashSet<&str> = HashSet::new();
    let mut collected = Vec::new();

    'outer: for concept in concepts {
        let Some(entry) = index.get(concept) else {
            continue;
        };
        for resource in entry.resources() {
            let keep = resource.url.is_empty() || seen_urls.insert(resource.url.as_str());
            if keep {
                collected.push(ConceptResource {
                    title: resource.title.clone(),
                    url: resource.url.clone(),
                    source: resource.source,
                    concept: concept.clone(),
                });
                if collected.len() == MAX_RESOURCES {
                    break 'outer;
                }
            }
        }
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{Curriculum, Resource, Topic};

    fn resource(title: &str, url: &str) -> Resource {
        Resource {
            title: title.to_string(),
            url: url.to_string(),
            source: Source::GeeksForGeeks,
        }
    }

    fn index() -> ConceptIndex {
        ConceptIndex::build(&Curriculum {
            title: String::new(),
            learning_paths: Vec::new(),
            topics: vec![Topic {
                name: "stacks".to_string(),
                display_name: "Stacks".to_string(),
                subtopics: vec!["push operation".to_string()],
                resources: vec![
                    resource("Stacks and the Push Operation", "https://example.com/push"),
                    resource("Stack Basics", "https://example.com/basics"),
                ],
            }],
        })
    }

    #[test]
    fn test_resources_tagged_with_source_concept() {
        let resources = collect_resources(&index(), &["stacks".to_string()]);
        assert_eq!(resources.len(), 2);
        assert!(resources.iter().all(|r| r.concept == "stacks"));
    }

    #[test]
    fn test_dedup_by_url_keeps_first_tag() {
        // The push resource is reachable both through the topic and
        // through the subtopic; the topic is visited first and its tag
        // wins.
        let resources = collect_resources(
            &index(),
            &["stacks".to_string(), "push operation".to_string()],
        );
        let push: Vec<_> = resources
            .iter()
            .filter(|r| r.url == "https://example.com/push")
            .collect();
        assert_eq!(push.len(), 1);
        assert_eq!(push[0].concept, "stacks");
    }

    #[test]
    fn test_empty_urls_never_deduplicated() {
        let index = ConceptIndex::build(&Curriculum {
            title: String::new(),
            learning_paths: Vec::new(),
            topics: vec![Topic {
                name: "queues".to_string(),
                display_name: "Queues".to_string(),
                subtopics: Vec::new(),
                resources: vec![resource("Handout A", ""), resource("Handout B", "")],
            }],
        });

        let resources = collect_resources(&index, &["queues".to_string()]);
        assert_eq!(resources.len(), 2);
    }

    #[test]
    fn test_cap_at_ten() {
        let many: Vec<Resource> = (0..15)
            .map(|i| resource(&format!("R{i}"), &format!("https://example.com/{i}")))
            .collect();
        let index = ConceptIndex::build(&Curriculum {
            title: String::new(),
            learning_paths: Vec::new(),
            topics: vec![Topic {
                name: "graphs".to_string(),
                display_name: "Graphs".to_string(),
                subtopics: Vec::new(),
                resources: many,
            }],
        });

        let resources = collect_resources(&index, &["graphs".to_string()]);
        assert_eq!(resources.len(), MAX_RESOURCES);
    }

    #[test]
    fn test_unindexed_concept_contributes_nothing() {
        let resources = collect_resources(&index(), &["heaps".to_string()]);
        assert!(resources.is_empty());
    }
}
