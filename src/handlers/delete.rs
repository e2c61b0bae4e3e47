//! Delete handler for the task MCP server

use crate::TaskServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Handles permanent task removal. The freed id is never reissued.
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let task = match self.store.delete(&id) {
            Ok(task) => task,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };

        Ok(format!("Task '{}' has been deleted", task.description))
    }
}
