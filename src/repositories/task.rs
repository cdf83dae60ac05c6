//! Task repository for database operations.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::task::TaskId;
use crate::entities::{done, task};
use crate::error::Result;

/// A task row joined with its completion record, if any.
pub type TaskWithDone = (task::Model, Option<done::Model>);

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks ordered by id, each joined with its completion record.
    pub async fn get_all_with_done<C>(conn: &C) -> Result<Vec<TaskWithDone>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .find_also_related(done::Entity)
            .order_by_asc(task::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single task by id joined with its completion record.
    pub async fn get_by_id_with_done<C>(conn: &C, id: TaskId) -> Result<Option<TaskWithDone>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find_by_id(id)
            .find_also_related(done::Entity)
            .one(conn)
            .await?)
    }

    /// Insert a new task and return it with its assigned id.
    pub async fn insert<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model>
    where
        C: ConnectionTrait,
    {
        Ok(task.insert(conn).await?)
    }

    /// Overwrite the title and due date of a task, returning the number of rows changed.
    ///
    /// Issued as a single `UPDATE` so a transaction starts with a write.
    pub async fn update_fields<C>(
        conn: &C,
        id: TaskId,
        title: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::update_many()
            .col_expr(task::Column::Title, Expr::value(title))
            .col_expr(task::Column::DueDate, Expr::value(due_date))
            .filter(task::Column::Id.eq(id))
            .exec(conn)
            .await?
            .rows_affected)
    }

    /// Delete a task by id, returning the number of rows removed.
    pub async fn delete_by_id<C>(conn: &C, id: TaskId) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::delete_by_id(id).exec(conn).await?.rows_affected)
    }
}
