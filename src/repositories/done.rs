//! Completion record repository for database operations.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::done;
use crate::entities::task::TaskId;
use crate::error::Result;

/// Repository for completion-related database operations.
pub struct DoneRepository;

impl DoneRepository {
    /// Get all completion records ordered by task id.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<done::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(done::Entity::find().order_by_asc(done::Column::Id).all(conn).await?)
    }

    /// Check whether a completion record exists for the task.
    pub async fn exists<C>(conn: &C, task_id: TaskId) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        Ok(done::Entity::find_by_id(task_id).one(conn).await?.is_some())
    }

    /// Insert a completion record unless one already exists.
    ///
    /// Returns the number of rows inserted (0 when the task was already done).
    pub async fn insert_if_absent<C>(conn: &C, task_id: TaskId) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let record = done::ActiveModel {
            id: ActiveValue::Set(task_id),
        };

        Ok(done::Entity::insert(record)
            .on_conflict(OnConflict::column(done::Column::Id).do_nothing().to_owned())
            .exec_without_returning(conn)
            .await?)
    }

    /// Delete the completion record for a task, returning the number of rows removed.
    pub async fn delete_by_id<C>(conn: &C, task_id: TaskId) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(done::Entity::delete_by_id(task_id).exec(conn).await?.rows_affected)
    }
}
