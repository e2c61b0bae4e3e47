//! Task MCP Server - Main Entry Point
//!
//! This is the main entry point for the task MCP server application.
//! The actual implementation is in the `task_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use task_mcp::{TaskServerHandler, TaskStore};

/// Task MCP Server - natural-language task tracking with deadline inference
///
/// Tasks live in memory for the lifetime of the process.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    // The store is owned here and injected into the handler
    let handler = TaskServerHandler::new(TaskStore::new());
    serve_stdio(handler).await?;
    Ok(())
}
