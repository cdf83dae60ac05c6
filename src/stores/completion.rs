use log::{debug, info, warn};
use sea_orm::{SqlErr, TransactionTrait};

use crate::constants::{LOG_TASK_MARKED_DONE, LOG_TASK_NOT_FOUND, LOG_TASK_UNMARKED_DONE};
use crate::entities::task::TaskId;
use crate::error::{Result, StoreError};
use crate::models::DoneRecord;
use crate::repositories::DoneRepository;
use crate::storage::LocalStorage;

/// Owns the completion records that mark tasks as done.
#[derive(Clone, Debug)]
pub struct CompletionStore {
    storage: LocalStorage,
}

impl CompletionStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Marks a task as done. Marking an already done task is a no-op.
    ///
    /// The insert runs first and the foreign key on `dones.id` decides whether
    /// the task exists.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the task does not exist; nothing is written in that case
    pub async fn mark_done(&self, task_id: TaskId) -> Result<DoneRecord> {
        let txn = self.storage.conn.begin().await?;

        let inserted = match DoneRepository::insert_if_absent(&txn, task_id).await {
            Ok(inserted) => inserted,
            Err(StoreError::Storage(err))
                if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) =>
            {
                warn!("{}: {} (mark done)", LOG_TASK_NOT_FOUND, task_id);
                return Err(StoreError::NotFound(task_id));
            }
            Err(err) => return Err(err),
        };

        txn.commit().await?;

        if inserted == 0 {
            debug!("Task {} was already done", task_id);
        } else {
            info!("{}: {}", LOG_TASK_MARKED_DONE, task_id);
        }
        Ok(DoneRecord { id: task_id })
    }

    /// Clears the done mark of a task.
    ///
    /// Succeeds without changes when the task is not done or does not exist.
    pub async fn unmark_done(&self, task_id: TaskId) -> Result<()> {
        let txn = self.storage.conn.begin().await?;
        let removed = DoneRepository::delete_by_id(&txn, task_id).await?;
        txn.commit().await?;

        if removed == 0 {
            debug!("Task {} was not done", task_id);
        } else {
            info!("{}: {}", LOG_TASK_UNMARKED_DONE, task_id);
        }
        Ok(())
    }

    /// Returns whether a completion record exists for the task.
    pub async fn is_done(&self, task_id: TaskId) -> Result<bool> {
        DoneRepository::exists(&self.storage.conn, task_id).await
    }

    /// Returns all completion records ordered by task id.
    pub async fn list_done(&self) -> Result<Vec<DoneRecord>> {
        let records = DoneRepository::get_all(&self.storage.conn).await?;
        Ok(records.into_iter().map(DoneRecord::from).collect())
    }
}
