//! Constants used throughout the crate
//!
//! This module centralizes default values, limits and log message templates
//! so that the stores, configuration and logger agree on them.

/// Maximum number of characters stored in a task title (`VARCHAR(1024)`)
pub const TITLE_MAX_LENGTH: usize = 1024;

/// Date format used for due dates in configuration headers and logs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// File names
pub const APP_DIR_NAME: &str = "tasklist";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "tasklist.toml";
pub const DATABASE_FILE_NAME: &str = "tasklist.db";
pub const LOG_FILE_NAME: &str = "tasklist.log";

// Database defaults
/// Default size of the SQLite connection pool for file-backed databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
/// Upper bound accepted by configuration validation
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;
/// Connection URL for a private in-memory database
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

// Log Messages
pub const LOG_TASK_CREATED: &str = "✅ Task created";
pub const LOG_TASK_UPDATED: &str = "✅ Task updated";
pub const LOG_TASK_DELETED: &str = "✅ Task deleted";
pub const LOG_TASK_MARKED_DONE: &str = "✅ Task marked done";
pub const LOG_TASK_UNMARKED_DONE: &str = "✅ Task marked not done";
pub const LOG_TASK_NOT_FOUND: &str = "❌ Task not found";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
