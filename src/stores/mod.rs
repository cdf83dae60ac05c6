//! Task and completion stores.
//!
//! This module provides the two services callers interact with:
//! - [`TaskStore`] for the task lifecycle (list, create, get, update, delete)
//! - [`CompletionStore`] for marking tasks done and undone
//!
//! Both share one [`LocalStorage`], so a task deletion and its completion
//! record removal commit or roll back together.
//!
//! # Example
//! ```rust,no_run
//! use tasklist::models::CreateTask;
//! use tasklist::storage::LocalStorage;
//! use tasklist::stores::Stores;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let storage = LocalStorage::in_memory().await?;
//! let stores = Stores::new(storage, 1024);
//!
//! let task = stores.tasks.create(CreateTask::new("buy milk")).await?;
//! stores.completions.mark_done(task.id).await?;
//! assert!(stores.tasks.get(task.id).await?.done);
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod tasks;

pub use completion::CompletionStore;
pub use tasks::TaskStore;

use crate::config::Config;
use crate::storage::LocalStorage;

/// Both stores wired over the same backing store
#[derive(Clone, Debug)]
pub struct Stores {
    pub tasks: TaskStore,
    pub completions: CompletionStore,
}

impl Stores {
    /// Build both stores over an already opened storage.
    pub fn new(storage: LocalStorage, max_title_length: usize) -> Self {
        Self {
            tasks: TaskStore::with_title_limit(storage.clone(), max_title_length),
            completions: CompletionStore::new(storage),
        }
    }

    /// Open the configured database and build both stores over it.
    pub async fn open(config: &Config) -> anyhow::Result<Self> {
        let storage = LocalStorage::from_config(&config.database).await?;
        Ok(Self::new(storage, config.tasks.max_title_length))
    }
}
