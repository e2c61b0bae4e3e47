//! Validation helper functions for the task MCP server
//!
//! This module contains validation logic for status values and task
//! descriptions. Task ids are deliberately not normalized here: lookups are
//! exact-match and case-sensitive.

use crate::error::StoreError;
use crate::tasks::TaskStatus;

/// Parse and validate a status value
///
/// # Arguments
/// * `status_str` - Status string to parse
///
/// # Returns
/// Result containing the parsed TaskStatus or a validation error
pub fn parse_status(status_str: &str) -> Result<TaskStatus, StoreError> {
    status_str.parse::<TaskStatus>().map_err(|_| {
        StoreError::Validation(format!(
            "Invalid status '{}'. Valid statuses: pending, in_progress, completed",
            status_str
        ))
    })
}

/// Validate that a task description carries content
///
/// # Arguments
/// * `description` - Raw description text, before deadline extraction
///
/// # Returns
/// Ok when the text contains at least one non-whitespace character
pub fn validate_description(description: &str) -> Result<(), StoreError> {
    if description.trim().is_empty() {
        return Err(StoreError::Validation(
            "Task description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
