//! List handler for the task MCP server

use crate::TaskServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Handles list operations - optionally filters by status and formats
    /// results for display. Tasks appear in creation order.
    pub async fn handle_list(&self, status: Option<String>) -> McpResult<String> {
        // Parse and validate the status filter if provided
        let status_filter = if let Some(ref status_str) = status {
            match validation::parse_status(status_str) {
                Ok(s) => Some(s),
                Err(e) => {
                    bail_public!(_, "{}", e);
                }
            }
        } else {
            None
        };

        let mut tasks = self.store.list();
        if let Some(filter) = status_filter {
            tasks.retain(|task| task.status == filter);
        }

        Ok(formatting::format_tasks(&tasks))
    }
}
