//! Lazily initialized, process-wide database pool.
//!
//! The manager is constructed once at startup and injected wherever a pool
//! is needed; there is no ambient global. The pool itself is created on the
//! first `acquire()` and cached for the process lifetime. Creation runs
//! under a write lock with a double-check, so however many requests arrive
//! before the first connection completes, exactly one connection attempt
//! is made. A failed attempt caches nothing; the next call retries from
//! scratch.

use crate::{DbError, Result};

use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::RwLock;

/// Static pool bounds and timeouts; nothing here adapts at runtime.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
}

impl ConnectionSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(10),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

pub struct ConnectionManager {
    settings: ConnectionSettings,
    pool: RwLock<Option<SqlitePool>>,
    attempts: AtomicU64,
}

impl ConnectionManager {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self {
            settings,
            pool: RwLock::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    /// Returns the shared pool, creating it on first use.
    pub async fn acquire(&self) -> Result<SqlitePool> {
        // Fast path: pool already exists (read lock)
        {
            let pool = self.pool.read().await;
            if let Some(pool) = pool.as_ref() {
                return Ok(pool.clone());
            }
        }

        // Slow path: create the pool (write lock for the entire operation)
        let mut pool = self.pool.write().await;

        // Double-check: another task may have created it while we waited
        if let Some(pool) = pool.as_ref() {
            return Ok(pool.clone());
        }

        let created = self.create_pool().await?;
        *pool = Some(created.clone());

        Ok(created)
    }

    /// Tears down the cached pool. Intended for test teardown; request
    /// handling never calls this.
    pub async fn release(&self) {
        let pool = self.pool.write().await.take();
        if let Some(pool) = pool {
            pool.close().await;
        }
    }

    /// Number of connection attempts made so far, successful or not.
    pub fn connect_attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    async fn create_pool(&self) -> Result<SqlitePool> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let options = SqliteConnectOptions::from_str(&self.settings.url)?
            .create_if_missing(true)
            .busy_timeout(self.settings.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.settings.max_connections)
            .min_connections(self.settings.min_connections)
            .acquire_timeout(self.settings.acquire_timeout)
            .connect_with(options)
            .await?;

        self.run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
