//! Process bootstrap for the management console's access-control
//! layer: resolves environment paths, initializes logging, builds the
//! initial access policy and starts the configuration watcher that
//! keeps it fresh.

mod logging;

pub use logging::{init_logging, log_shutdown};

use std::path::PathBuf;
use std::sync::Arc;

use config::ConsoleConfig;
use policy::{watcher, PolicyStore};

/// Environment-derived paths.
#[derive(Debug, Clone)]
pub struct EnvPaths {
    /// Directory for runtime data such as log files.
    pub data_path: PathBuf,
    /// The console configuration file watched for refresh events.
    pub configuration_file: PathBuf,
}

impl EnvPaths {
    /// Load paths from environment variables, with defaults relative
    /// to the working directory.
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| "./data".to_string());
        let configuration_file = std::env::var("CONSOLE_CONFIG")
            .unwrap_or_else(|_| "./config/console.yaml".to_string());

        Self {
            data_path: PathBuf::from(data_path),
            configuration_file: PathBuf::from(configuration_file),
        }
    }
}

/// Load the configuration, build the initial policy snapshot and start
/// the hot-reload watcher.
///
/// A missing or unparseable configuration file is not fatal: the
/// console boots with a default configuration, which the selection
/// layers turn into the anonymous fallback (with its own warning).
///
/// # Errors
///
/// Only the file watcher setup can fail; policy construction itself is
/// total over configurations.
pub async fn bootstrap(
    paths: &EnvPaths,
) -> Result<Arc<PolicyStore>, Box<dyn std::error::Error>> {
    let config = match ConsoleConfig::from_file(&paths.configuration_file) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Could not load {:?}: {}; starting with the default configuration",
                paths.configuration_file,
                e
            );
            ConsoleConfig::default()
        }
    };

    let store = Arc::new(PolicyStore::new(&config));
    tracing::info!(
        "Access policy initialized with {} authentication client(s)",
        store.current().clients().len()
    );

    watcher::start_watching(paths.configuration_file.clone(), store.clone()).await?;

    Ok(store)
}
