use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::DatabaseConfig;
use crate::constants::{APP_DIR_NAME, DATABASE_FILE_NAME, IN_MEMORY_DATABASE_URL};
use crate::entities::{done, task};
use crate::error::Result;

/// Keeps the single in-memory connection from being recycled, which would drop the database.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Backing store shared by the task and completion stores
#[derive(Clone, Debug)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the SQLite database at `database_url` and initialize the schema
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut options = ConnectOptions::new(database_url.to_owned());
        options
            .max_connections(max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        info!("Opened task database at {}", database_url);
        Ok(storage)
    }

    /// Create a private in-memory database, used by tests and ephemeral runs
    pub async fn in_memory() -> Result<Self> {
        // Every SQLite connection to `:memory:` sees its own database, so the pool
        // must hold exactly one connection and never close it.
        let mut options = ConnectOptions::new(IN_MEMORY_DATABASE_URL);
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        debug!("Opened in-memory task database");
        Ok(storage)
    }

    /// Open the database described by the `[database]` configuration section
    pub async fn from_config(config: &DatabaseConfig) -> anyhow::Result<Self> {
        if config.in_memory {
            return Ok(Self::in_memory().await?);
        }

        let path = match &config.path {
            Some(path) => path.clone(),
            None => Self::get_default_database_path()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }

        let url = Self::database_url(&path);
        Self::new(&url, config.max_connections)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))
    }

    /// Build a SQLite connection URL that creates the file when missing
    pub fn database_url<P: AsRef<Path>>(path: P) -> String {
        format!("sqlite://{}?mode=rwc", path.as_ref().display())
    }

    /// Get the default database path inside the user's data directory
    pub fn get_default_database_path() -> anyhow::Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
    }

    /// Underlying SeaORM connection, for callers that need raw queries
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Initialize database schema from the entity definitions
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // `dones` references `tasks`, so tasks must exist first
        let mut tasks = schema.create_table_from_entity(task::Entity);
        tasks.if_not_exists();
        self.conn.execute(backend.build(&tasks)).await?;

        let mut dones = schema.create_table_from_entity(done::Entity);
        dones.if_not_exists();
        self.conn.execute(backend.build(&dones)).await?;

        Ok(())
    }
}
