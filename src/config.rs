use anyhow::{Context, Result};
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "LEDGERUI_DATA_DIR";
const LOG_ENV: &str = "LEDGERUI_LOG";
const DEFAULT_LOG_FILTER: &str = "ledgerui=info";

/// Where the ledger lives and how chatty the log is.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// `LEDGERUI_DATA_DIR` overrides the platform data directory;
    /// `LEDGERUI_LOG` takes a tracing filter such as `ledgerui=debug`.
    pub(crate) fn from_env() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|f| !f.trim().is_empty());
        Self::in_dir(data_dir, log_filter)
    }

    pub(crate) fn in_dir(data_dir: PathBuf, log_filter: Option<String>) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self {
            db_path: data_dir.join("ledger.db"),
            log_path: data_dir.join("ledger.log"),
            log_filter: log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            data_dir,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgerui", "LedgerUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
