//! Local storage module for task persistence
//!
//! This module owns the SQLite database handle and creates the schema for:
//! - Tasks
//! - Completion (done) records

pub mod db;

pub use db::LocalStorage;
