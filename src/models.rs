//! Plain data exchanged with callers of the stores.
//!
//! These types carry no database handles, so a transport layer can serialize
//! them directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::task::TaskId;
use crate::entities::{done, task};
use crate::error::{Result, StoreError};
use crate::repositories::TaskWithDone;

/// A task as seen by readers, with its derived completion flag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// True iff a completion record exists for this task
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub(crate) fn from_model(model: task::Model, done: bool) -> Self {
        Self {
            id: model.id,
            title: model.title,
            due_date: model.due_date,
            done,
        }
    }
}

impl From<TaskWithDone> for Task {
    fn from((model, done): TaskWithDone) -> Self {
        Self::from_model(model, done.is_some())
    }
}

/// Arguments for creating a new task
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl CreateTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Arguments for updating a task.
///
/// Both fields replace the stored values, so `None` clears them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl UpdateTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// A completion record; its id is the id of the completed task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoneRecord {
    pub id: TaskId,
}

impl From<done::Model> for DoneRecord {
    fn from(model: done::Model) -> Self {
        Self { id: model.id }
    }
}

/// Reject titles longer than `max_length` characters.
pub(crate) fn validate_title(title: Option<&str>, max_length: usize) -> Result<()> {
    if let Some(title) = title {
        let length = title.chars().count();
        if length > max_length {
            return Err(StoreError::Validation(format!(
                "title must be at most {} characters, got {}",
                max_length, length
            )));
        }
    }
    Ok(())
}
