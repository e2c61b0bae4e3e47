//! Create handler for the task MCP server

use crate::TaskServerHandler;
use chrono::Local;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// **Capture**: Create a task from a free-form description.
    /// A deadline phrase in the text ("by tomorrow", "next week", "in 3
    /// days", "friday", "12/25/2024") is recognized, stripped from the
    /// description, and stored as the task's deadline.
    pub async fn handle_create(&self, description: String) -> McpResult<String> {
        let task = match self.store.create(&description, Local::now()) {
            Ok(task) => task,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };

        let mut response = format!(
            "Task created with ID: {} (status: {:?})",
            task.id, task.status
        );
        response.push_str(&format!("\nDescription: {}", task.description));
        if let Some(deadline) = task.deadline {
            response.push_str(&format!("\nDeadline: {}", deadline));
        }

        Ok(response)
    }
}
