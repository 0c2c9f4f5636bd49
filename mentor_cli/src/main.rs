//! Command-line front-end for the mentor engine.
//!
//! Loads a curriculum document, builds the concept mapper once, and
//! runs a single query against it.
//!
//! ```bash
//! $ mentor analyze "what is a binary search tree"
//! $ mentor gaps "explain array deletion" --json
//! ```
//!
//! Log verbosity is controlled through `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mentor_core::{ConceptMapper, GapAnalysis, QueryAnalysis};

/// CLI arguments for the mentor.
#[derive(Parser, Debug)]
#[command(name = "mentor", version)]
struct Cli {
    /// Path to the curriculum JSON document
    #[arg(
        short,
        long,
        global = true,
        default_value = "data/processed_data/dsa_curriculum.json"
    )]
    curriculum: String,

    /// Emit the full result as JSON instead of a summary
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

/// Mentor actions available via CLI.
#[derive(Subcommand, Debug)]
enum Action {
    /// Analyze a query: intent, concepts, related concepts, resources
    Analyze {
        /// Free-text learner query
        query: String,
    },

    /// Analyze a query and infer prerequisite concepts and knowledge gaps
    Gaps {
        /// Free-text learner query
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mapper = ConceptMapper::from_path(&cli.curriculum)
        .with_context(|| format!("failed to load curriculum from {}", cli.curriculum))?;
    tracing::info!("curriculum loaded: {} concept name forms", mapper.index().len());

    match cli.action {
        Action::Analyze { query } => {
            let analysis = mapper.analyze(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
        Action::Gaps { query } => {
            let result = mapper.identify_knowledge_gaps(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_gaps(&result);
            }
        }
    }

    Ok(())
}

fn print_analysis(analysis: &QueryAnalysis) {
    println!("Query:            {}", analysis.original_query);
    println!("Query type:       {}", analysis.query_type);
    println!("Extracted:        {}", analysis.extracted_concepts.join(", "));
    println!("Related:          {}", analysis.related_concepts.join(", "));
    println!("Resources:");
    for resource in &analysis.resources {
        println!("  - {} ({})", resource.title, resource.source);
    }
}

fn print_gaps(result: &GapAnalysis) {
    print_analysis(&result.query_analysis);
    println!("Prerequisites:    {}", result.prerequisite_concepts.join(", "));
    println!("Knowledge gaps:   {}", result.knowledge_gaps.join(", "));
    if !result.prerequisite_resources.is_empty() {
        println!("Prerequisite resources:");
        for resource in &result.prerequisite_resources {
            println!("  - {} ({})", resource.title, resource.source);
        }
    }
    if !result.gap_resources.is_empty() {
        println!("Gap resources:");
        for resource in &result.gap_resources {
            println!("  - {} ({})", resource.title, resource.source);
        }
    }
}
