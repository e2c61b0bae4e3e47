//! Task MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for tracking
//! tasks described in free-form natural language. A deadline phrase inside a
//! description ("by tomorrow", "next week", "in 3 days", "friday",
//! "12/25/2024") is resolved to a concrete calendar date and stripped from
//! the stored text; tasks then move through a small lifecycle of states.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TaskServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tasks` module and the `deadline` extractor - Core
//!   task model, lifecycle store, and deadline inference
//! - **Helper Layer**: `validation` and `formatting` modules - Input checks
//!   and reply rendering
//!
//! The store is in-memory only and lives for the process lifetime; it is
//! constructed at the entry point and injected into the handler.
//!
//! # Example
//!
//! ```no_run
//! use task_mcp::{TaskServerHandler, TaskStore};
//!
//! let handler = TaskServerHandler::new(TaskStore::new());
//! // Use handler with MCP server...
//! ```

mod deadline;
mod error;
mod formatting;
mod handlers;
mod tasks;
mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use deadline::{Extraction, extract};
pub use error::StoreError;
pub use tasks::{Task, TaskStatus, TaskStore};

/// MCP server handler for task tracking
///
/// Provides an MCP interface over the task lifecycle store: capture with
/// deadline inference, listing, detail lookup, status changes, and deletion.
/// All state is in-memory and scoped to the process.
pub struct TaskServerHandler {
    pub(crate) store: TaskStore,
}

impl TaskServerHandler {
    /// Create a new task server handler around an injected store
    ///
    /// # Example
    /// ```
    /// # use task_mcp::{TaskServerHandler, TaskStore};
    /// let handler = TaskServerHandler::new(TaskStore::new());
    /// ```
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Extract ID from response message
    ///
    /// Helper function for tests to extract the task ID from response
    /// messages. Response format: "Task created with ID: <id> (status: ...)"
    #[cfg(test)]
    fn extract_id_from_response(response: &str) -> String {
        if let Some(start) = response.find("ID: ") {
            let id_part = &response[start + 4..];
            if let Some(end) = id_part.find(" (") {
                return id_part[..end].trim().to_string();
            }
        }
        // Fallback: try to get last whitespace-separated token without parentheses
        response
            .split_whitespace()
            .last()
            .unwrap_or("")
            .trim_end_matches(')')
            .to_string()
    }
}

/// Natural-language task tracker.
///
/// Describe a task in plain words and the server captures it, infers a
/// deadline from phrases like "by friday" or "in 3 days", and tracks the
/// task through its lifecycle.
///
/// Statuses: **pending** (not started) -> **in_progress** (being worked on)
/// -> **completed** (finished). Any status may move to any other status;
/// reopening a completed task is allowed.
///
/// Task IDs are short opaque strings assigned at creation (e.g. "a3f81c09");
/// use list to discover them.
#[mcp_server]
impl McpServer for TaskServerHandler {
    /// **Capture**: Create a task from a free-form description. Deadline
    /// phrases ("by tomorrow", "next week", "in 3 days", "friday",
    /// "12/25/2024") are recognized, removed from the description, and
    /// stored as the deadline.
    #[tool]
    pub async fn create(
        &self,
        /// Free-form task description, optionally containing a deadline phrase
        description: String,
    ) -> McpResult<String> {
        self.handle_create(description).await
    }

    /// **Review**: List tasks in creation order, optionally filtered by
    /// status.
    #[tool]
    pub async fn list(
        &self,
        /// Status filter: pending/in_progress/completed. Empty=all.
        status: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(status).await
    }

    /// **Inspect**: Show full details of a single task.
    #[tool]
    pub async fn show(
        &self,
        /// ID of the task to show
        id: String,
    ) -> McpResult<String> {
        self.handle_show(id).await
    }

    /// **Progress**: Change a task's status. All transitions are allowed,
    /// including moving a completed task back to pending.
    #[tool]
    pub async fn update(
        &self,
        /// ID of the task to update
        id: String,
        /// New status: pending/in_progress/completed
        status: String,
    ) -> McpResult<String> {
        self.handle_update(id, status).await
    }

    /// **Discard**: Delete a task permanently. The freed ID is never
    /// reissued.
    #[tool]
    pub async fn delete(
        &self,
        /// ID of the task to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }
}
