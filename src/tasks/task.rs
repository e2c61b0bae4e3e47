use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task status in the tracking lifecycle
///
/// Represents the three states a task moves through. Every state is reachable
/// from every other state; a completed task may be reopened.
/// Uses snake_case naming to match the wire format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not yet started
    pending,
    /// Currently being worked on
    in_progress,
    /// Finished
    completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::pending),
            "in_progress" => Ok(TaskStatus::in_progress),
            "completed" => Ok(TaskStatus::completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: pending, in_progress, completed",
                s
            )),
        }
    }
}

/// A tracked unit of work
///
/// Created from a free-form description: any recognized deadline phrase is
/// stripped out by the extractor before the description is stored, and the
/// resolved date lands in `deadline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned at creation, immutable thereafter
    pub id: String,
    /// What the work is, with any deadline phrase removed; never empty
    pub description: String,
    /// Resolved deadline date; absent when no phrase was recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Current lifecycle status (pending, in_progress, completed)
    pub status: TaskStatus,
    /// Instant the task was created
    pub created_at: DateTime<Local>,
    /// Instant of the last status change; always >= created_at
    pub updated_at: DateTime<Local>,
}
