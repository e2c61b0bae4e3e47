use thiserror::Error;

/// Errors surfaced by the task store
///
/// Both kinds are recoverable at the transport boundary; the server renders
/// them as reply text and keeps running. A mutation that loses a race against
/// a delete reports `NotFound` — indistinguishable from the id never having
/// existed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Malformed or missing required input
    #[error("{0}")]
    Validation(String),

    /// Referenced task id does not exist
    #[error("Task '{0}' not found")]
    NotFound(String),
}
