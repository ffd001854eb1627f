//! The swappable policy snapshot store.

use std::sync::{Arc, RwLock};

use config::ConsoleConfig;
use tracing::info;

use crate::{build_policy, AccessPolicy};

/// Holds the current access policy behind a single swappable
/// reference.
///
/// `current()` hands out the snapshot as an `Arc`; a reload builds an
/// entirely new policy and replaces the reference in one write.
/// Consumers mid-request keep whichever snapshot they captured, so
/// there are no torn reads and no fine-grained locking beyond the one
/// reference swap.
#[derive(Debug)]
pub struct PolicyStore {
    current: RwLock<Arc<AccessPolicy>>,
}

impl PolicyStore {
    /// Build the initial policy snapshot from a configuration.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(build_policy(config))),
        }
    }

    /// The current policy snapshot.
    pub fn current(&self) -> Arc<AccessPolicy> {
        self.current.read().unwrap().clone()
    }

    /// Rebuild the policy from a refreshed configuration and swap it
    /// in atomically.
    pub fn reload(&self, config: &ConsoleConfig) {
        let policy = Arc::new(build_policy(config));
        let mut current = self.current.write().unwrap();
        *current = policy;
        info!("Access policy snapshot replaced");
    }
}
