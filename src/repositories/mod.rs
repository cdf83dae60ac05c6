//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Every method is generic over [`sea_orm::ConnectionTrait`] so the same query
//! runs on the shared connection or inside a transaction.

pub mod done;
pub mod task;

pub use done::DoneRepository;
pub use task::{TaskRepository, TaskWithDone};
