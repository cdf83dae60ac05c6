use log::{info, warn};
use sea_orm::{ActiveValue, TransactionTrait};

use crate::constants::{LOG_TASK_CREATED, LOG_TASK_DELETED, LOG_TASK_NOT_FOUND, LOG_TASK_UPDATED, TITLE_MAX_LENGTH};
use crate::entities::task::{self, TaskId};
use crate::error::{Result, StoreError};
use crate::models::{validate_title, CreateTask, Task, UpdateTask};
use crate::repositories::{DoneRepository, TaskRepository};
use crate::storage::LocalStorage;

/// Owns creation, retrieval, update and deletion of tasks.
///
/// The store keeps no state besides a handle to the backing database; every
/// mutation runs in its own transaction.
#[derive(Clone, Debug)]
pub struct TaskStore {
    storage: LocalStorage,
    max_title_length: usize,
}

impl TaskStore {
    /// Creates a task store that accepts titles up to the column width.
    pub fn new(storage: LocalStorage) -> Self {
        Self::with_title_limit(storage, TITLE_MAX_LENGTH)
    }

    /// Creates a task store with a custom title length limit.
    pub fn with_title_limit(storage: LocalStorage, max_title_length: usize) -> Self {
        Self {
            storage,
            max_title_length,
        }
    }

    /// Returns all tasks ordered by id, each with its done flag.
    ///
    /// # Errors
    /// Returns [`StoreError::Storage`] if the query fails
    pub async fn list(&self) -> Result<Vec<Task>> {
        let rows = TaskRepository::get_all_with_done(&self.storage.conn).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Creates a new task. The database assigns its id and it starts not done.
    ///
    /// # Errors
    /// Returns [`StoreError::Validation`] if the title is too long, or
    /// [`StoreError::Storage`] if the insert fails
    pub async fn create(&self, args: CreateTask) -> Result<Task> {
        validate_title(args.title.as_deref(), self.max_title_length)?;

        let txn = self.storage.conn.begin().await?;

        let model = TaskRepository::insert(
            &txn,
            task::ActiveModel {
                title: ActiveValue::Set(args.title),
                due_date: ActiveValue::Set(args.due_date),
                ..Default::default()
            },
        )
        .await?;

        txn.commit().await?;

        info!("{}: {}", LOG_TASK_CREATED, model.id);
        Ok(Task::from_model(model, false))
    }

    /// Fetches a single task.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has this id
    pub async fn get(&self, id: TaskId) -> Result<Task> {
        TaskRepository::get_by_id_with_done(&self.storage.conn, id)
            .await?
            .map(Task::from)
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces the title and due date of an existing task.
    ///
    /// The completion record is not touched, so the returned task keeps its done flag.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has this id, or
    /// [`StoreError::Validation`] if the title is too long
    pub async fn update(&self, id: TaskId, args: UpdateTask) -> Result<Task> {
        validate_title(args.title.as_deref(), self.max_title_length)?;

        let txn = self.storage.conn.begin().await?;

        // Write before reading so the transaction takes the write lock up front
        if TaskRepository::update_fields(&txn, id, args.title, args.due_date).await? == 0 {
            warn!("{}: {} (update)", LOG_TASK_NOT_FOUND, id);
            return Err(StoreError::NotFound(id));
        }

        let task = TaskRepository::get_by_id_with_done(&txn, id)
            .await?
            .map(Task::from)
            .ok_or(StoreError::NotFound(id))?;

        txn.commit().await?;

        info!("{}: {}", LOG_TASK_UPDATED, id);
        Ok(task)
    }

    /// Deletes a task together with its completion record.
    ///
    /// Both rows are removed in one transaction: the completion record first,
    /// then the task, so no orphaned record can survive. A missing task rolls
    /// the transaction back.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has this id
    pub async fn delete(&self, id: TaskId) -> Result<()> {
        let txn = self.storage.conn.begin().await?;

        let was_done = DoneRepository::delete_by_id(&txn, id).await? > 0;

        if TaskRepository::delete_by_id(&txn, id).await? == 0 {
            warn!("{}: {} (delete)", LOG_TASK_NOT_FOUND, id);
            return Err(StoreError::NotFound(id));
        }

        txn.commit().await?;

        info!("{}: {} (was done: {})", LOG_TASK_DELETED, id, was_done);
        Ok(())
    }
}
