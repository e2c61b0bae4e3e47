use crate::deadline;
use crate::error::StoreError;
use crate::tasks::task::{Task, TaskStatus};
use crate::validation;
use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory task collection
///
/// Vec is used as the primary storage: it keeps insertion order, so `list`
/// output always matches creation sequence. The HashMap index is kept in sync
/// with the Vec during all mutating operations and exists for O(1) id checks.
pub(crate) struct TaskData {
    /// All live tasks in insertion order
    tasks: Vec<Task>,

    /// id -> status index for fast existence checks
    ///
    /// Kept in sync with the Vec:
    /// - add: inserts into both Vec and HashMap
    /// - remove: removes from both Vec and HashMap
    /// - set_status: updates status in both Vec and HashMap
    task_map: HashMap<String, TaskStatus>,

    /// Every id handed out over the process lifetime, deleted ones included.
    /// A freed id must read as unknown but is never reissued.
    issued_ids: HashSet<String>,
}

impl TaskData {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            task_map: HashMap::new(),
            issued_ids: HashSet::new(),
        }
    }

    /// Generate a new unique task id
    ///
    /// Random 8-character identifiers carry no ordering information. The loop
    /// retries on the (astronomically rare) collision with any id ever issued.
    fn generate_id(&mut self) -> String {
        loop {
            let candidate = Uuid::new_v4().simple().to_string()[..8].to_string();
            if !self.issued_ids.contains(&candidate) {
                self.issued_ids.insert(candidate.clone());
                return candidate;
            }
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn add(&mut self, task: Task) {
        self.task_map.insert(task.id.clone(), task.status);
        self.tasks.push(task);
    }

    fn remove(&mut self, id: &str) -> Option<Task> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let task = self.tasks.remove(pos);
            self.task_map.remove(id);
            Some(task)
        } else {
            None
        }
    }

    fn set_status(&mut self, id: &str, new_status: TaskStatus, now: DateTime<Local>) -> Option<Task> {
        let task = self.find_by_id_mut(id)?;
        task.status = new_status;
        task.updated_at = now;
        let updated = task.clone();
        self.task_map.insert(id.to_string(), new_status);
        Some(updated)
    }
}

/// Task lifecycle store
///
/// Owns the task collection behind a single mutation lock, so concurrent
/// creates never collide on an id and a delete racing a status change
/// resolves to one winner; the loser sees the task as absent. Every operation
/// is atomic from the caller's point of view.
///
/// The store is in-memory only. Callers construct one instance at process
/// start and inject it wherever task access is needed; the reference instant
/// for each mutation is supplied by the caller, never read from a clock here.
pub struct TaskStore {
    data: Mutex<TaskData>,
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: Mutex::new(TaskData::new()),
        }
    }

    /// Create a task from a raw description
    ///
    /// Runs deadline extraction on the text, assigns a fresh id, and stores
    /// the task with status `pending` and both timestamps set to `now`.
    ///
    /// # Errors
    /// `StoreError::Validation` when the description is empty or
    /// whitespace-only.
    pub fn create(&self, description_raw: &str, now: DateTime<Local>) -> Result<Task, StoreError> {
        validation::validate_description(description_raw)?;

        let extraction = deadline::extract(description_raw, now.date_naive());

        let mut data = self.data.lock().unwrap();
        let id = data.generate_id();
        let task = Task {
            id,
            description: extraction.cleaned,
            deadline: extraction.deadline,
            status: TaskStatus::pending,
            created_at: now,
            updated_at: now,
        };
        data.add(task.clone());
        Ok(task)
    }

    /// List all live tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        let data = self.data.lock().unwrap();
        data.tasks.clone()
    }

    /// Look up a task by id
    ///
    /// Lookup is exact-match and case-sensitive; ids are never normalized.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no live task has that id.
    pub fn get(&self, id: &str) -> Result<Task, StoreError> {
        let data = self.data.lock().unwrap();
        data.find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Change a task's status
    ///
    /// Any status can move to any other status. On success the task's
    /// `updated_at` is set to `now` and the updated task is returned.
    ///
    /// # Errors
    /// `StoreError::Validation` for an unrecognized status value,
    /// `StoreError::NotFound` when the id is absent.
    pub fn update_status(
        &self,
        id: &str,
        new_status: &str,
        now: DateTime<Local>,
    ) -> Result<Task, StoreError> {
        let status = validation::parse_status(new_status)?;

        let mut data = self.data.lock().unwrap();
        data.set_status(id, status, now)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Delete a task permanently and return it
    ///
    /// The freed id immediately reads as unknown and is never reissued for a
    /// new task.
    ///
    /// # Errors
    /// `StoreError::NotFound` when the id is absent.
    pub fn delete(&self, id: &str) -> Result<Task, StoreError> {
        let mut data = self.data.lock().unwrap();
        data.remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
