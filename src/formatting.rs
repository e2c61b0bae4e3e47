//! Formatting helper functions for the task MCP server
//!
//! This module renders tasks and confirmations as the reply text the
//! transport sends back to the user.

use crate::tasks::{Task, TaskStatus};

/// Format a single task into a detail display string
///
/// # Arguments
/// * `task` - The task to render
///
/// # Returns
/// Multi-line string with one field per line
pub fn format_task(task: &Task) -> String {
    let mut result = format!(
        "[{}] {} (status: {:?})\n",
        task.id, task.description, task.status
    );

    if let Some(deadline) = task.deadline {
        result.push_str(&format!("  Deadline: {}\n", deadline));
    }
    result.push_str(&format!(
        "  Created: {}\n",
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    result.push_str(&format!(
        "  Updated: {}\n",
        task.updated_at.format("%Y-%m-%d %H:%M")
    ));

    result
}

/// Format a list of tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to render, already in the order they should appear
///
/// # Returns
/// Counted header plus one summary line per task
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (status: {:?})\n",
            task.id, task.description, task.status
        ));
        if let Some(deadline) = task.deadline {
            result.push_str(&format!("  Deadline: {}\n", deadline));
        }
    }

    result
}

/// Short confirmation line for a status change
pub fn status_change_message(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::pending => "Task moved back to pending",
        TaskStatus::in_progress => "Task is now in progress",
        TaskStatus::completed => "Task completed",
    }
}
