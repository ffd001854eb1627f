//! Configuration file watcher driving policy hot-reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use config::ConsoleConfig;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::task;
use tracing::{debug, info, warn};

use crate::store::PolicyStore;

/// Start watching the console configuration file for changes.
///
/// Each modify or create event on the file reloads the configuration
/// and swaps a freshly built policy snapshot into the store. A file
/// that no longer parses leaves the previous snapshot in place.
pub async fn start_watching(
    config_path: PathBuf,
    store: Arc<PolicyStore>,
) -> Result<(), notify::Error> {
    let watch_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    info!("Starting configuration watcher for {:?}", config_path);

    // Channel for file events
    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Watch the containing directory; editors often replace the file
    // rather than writing it in place.
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    task::spawn_blocking(move || {
        info!("Configuration watcher task started");

        // Keep the watcher alive
        let _watcher = watcher;

        for event in rx {
            handle_file_event(&event, &config_path, &store);
        }
    });

    Ok(())
}

fn handle_file_event(event: &Event, config_path: &Path, store: &PolicyStore) {
    debug!("File event: {:?}", event);

    let concerns_config = event
        .paths
        .iter()
        .any(|p| p.file_name() == config_path.file_name());
    if !concerns_config {
        return;
    }

    match event.kind {
        EventKind::Modify(_) | EventKind::Create(_) => {
            info!("Console configuration changed: {:?}", config_path);
            reload_policy(config_path, store);
        }
        EventKind::Remove(_) => {
            warn!(
                "Console configuration file removed: {:?}; keeping the current policy",
                config_path
            );
        }
        _ => {
            // Ignore other events
        }
    }
}

fn reload_policy(config_path: &Path, store: &PolicyStore) {
    match ConsoleConfig::from_file(config_path) {
        Ok(config) => {
            store.reload(&config);
            info!("Access policy rebuilt from {:?}", config_path);
        }
        Err(e) => {
            warn!(
                "Failed to reload configuration from {:?}: {}; keeping the previous policy",
                config_path, e
            );
        }
    }
}
