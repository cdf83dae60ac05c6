//! Tasklist - task tracking core with separate completion records
//!
//! Tasks are stored in one table and their completion in another: a task is
//! done exactly when a row with the same id exists in the `dones` table.
//! Deleting a task removes that row in the same transaction.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`stores`] - Task and completion stores, the interface callers use
//! * [`models`] - Plain data passed to and returned by the stores
//! * [`storage`] - SQLite database handle and schema setup
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types returned by the stores
pub mod error;

/// Logging setup for file-based diagnostics
pub mod logger;

/// Plain data types exchanged with store callers
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer owning the database connection
pub mod storage;

/// Task and completion stores
pub mod stores;

pub use entities::task::TaskId;
pub use error::{Result, StoreError};
pub use stores::{CompletionStore, Stores, TaskStore};
