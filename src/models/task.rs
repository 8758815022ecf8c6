use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item. Stored in the "tasks" collection keyed by `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub task_id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// When the task should be done (optional).
    pub due_date: Option<DateTime<Utc>>,

    /// When the user wants to be reminded about the task (optional).
    pub reminder_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_resolved: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Whether a reminder is set at all.
    pub fn has_reminder(&self) -> bool {
        self.reminder_date.is_some()
    }

    /// Whether the reminder is still in the future relative to `now`.
    pub fn is_reminder_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.reminder_date.map_or(false, |reminder| reminder > now)
    }
}

/// Request payload for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_date: Option<DateTime<Utc>>,
}

/// Request payload for editing a task. Edit is a full replace: an absent
/// due_date or reminder_date clears the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_date: Option<DateTime<Utc>>,
}
