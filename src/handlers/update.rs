//! Update handler for the task MCP server

use crate::TaskServerHandler;
use crate::formatting;
use chrono::Local;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// **Progress**: Move a task to a new status as you work on it.
    /// Every status can move to every other status - reopening a completed
    /// task is a legitimate change, not an error.
    pub async fn handle_update(&self, id: String, status: String) -> McpResult<String> {
        let task = match self.store.update_status(&id, &status, Local::now()) {
            Ok(task) => task,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };

        Ok(format!(
            "{}\n{}",
            formatting::status_change_message(task.status),
            formatting::format_task(&task)
        ))
    }
}
