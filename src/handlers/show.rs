//! Show handler for the task MCP server

use crate::TaskServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Handles detail lookup for a single task by id.
    pub async fn handle_show(&self, id: String) -> McpResult<String> {
        let task = match self.store.get(&id) {
            Ok(task) => task,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };

        Ok(formatting::format_task(&task))
    }
}
