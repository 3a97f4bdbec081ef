//! CLI module for the Industrial Agent Orchestrator
//!
//! Subcommands:
//! - `serve`: HTTP API (default deployment mode)
//! - `query`: run a single query and print the JSON response
//! - `graph`: print the workflow state machine as Mermaid

pub mod graph;
pub mod query;
pub mod serve;

use clap::{Parser, Subcommand};

/// Industrial Agent Orchestrator - safety-gated answers for field engineers
#[derive(Parser)]
#[command(name = "industrial-orchestrator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Run one query through the workflow and print the response
    Query(query::QueryArgs),

    /// Print the workflow state machine as a Mermaid flowchart
    Graph,
}
