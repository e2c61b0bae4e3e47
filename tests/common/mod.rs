//! Common test utilities for integration tests

use task_mcp::{TaskServerHandler, TaskStore};

/// Create a test handler with a fresh in-memory store
pub fn get_test_handler() -> TaskServerHandler {
    TaskServerHandler::new(TaskStore::new())
}

/// Extract task ID from create() response message
/// Response format: "Task created with ID: <id> (status: pending)"
#[allow(dead_code)]
pub fn extract_id_from_response(response: &str) -> String {
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
