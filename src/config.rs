//! TOML configuration and deploy-table hot reload.
//!
//! DESIGN
//! ======
//! The file is read once at startup for `secret_key` and `reload_interval`.
//! After that a background task re-reads it every `reload_interval` seconds
//! and swaps in the `[deploy]` table when it changed. The secret is not
//! reloaded; rotating it requires a restart.
//!
//! ERROR HANDLING
//! ==============
//! A missing file is an empty config, so `main` reports the first missing
//! required key instead of an I/O error. A reload that fails to read or parse
//! keeps the previous table and logs the error.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::fs;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::error::Error;

/// Deploy entries keyed by `"<owner>/<repo>#<branch>"`.
pub type DeployTable = HashMap<String, DeployEntry>;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    pub secret_key: Option<String>,
    /// Seconds between reloads of the `[deploy]` table.
    pub reload_interval: Option<u64>,
    #[serde(default)]
    pub deploy: DeployTable,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DeployEntry {
    /// Script run with `sh -c` from its own directory.
    pub script: String,
}

/// Parse configuration text.
pub fn parse(content: &str) -> Result<Config, Error> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from `path`. A missing file yields an empty config.
pub async fn load(path: &Path) -> Result<Config, Error> {
    match fs::read_to_string(path).await {
        Ok(content) => parse(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "config file not found, using empty config");
            Ok(Config::default())
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Re-read `path` and replace `table` if the deploy entries differ.
/// Returns whether the table changed.
pub async fn reload(table: &RwLock<DeployTable>, path: &Path) -> Result<bool, Error> {
    let next = load(path).await?.deploy;
    let mut guard = table.write().await;
    if *guard == next {
        return Ok(false);
    }
    *guard = next;
    Ok(true)
}

/// Reload period for `interval_secs`, clamped to at least one second.
pub(crate) fn reload_period(interval_secs: u64) -> Duration {
    Duration::from_secs(interval_secs.max(1))
}

/// Spawn the periodic reload task.
pub fn spawn_reload_task(table: Arc<RwLock<DeployTable>>, interval_secs: u64, path: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(reload_period(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; startup already loaded the file.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match reload(&table, &path).await {
                Ok(true) => {
                    let entries = table.read().await.len();
                    info!(entries, "deploy table reloaded");
                }
                Ok(false) => {}
                Err(e) => error!(error = %e, "config reload failed, keeping previous table"),
            }
        }
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
