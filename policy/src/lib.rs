//! Access-policy composition for the management console.
//!
//! Combines the authentication client list and the admin-role matcher
//! into a single immutable [`AccessPolicy`] snapshot, and holds the
//! current snapshot behind one swappable reference so a configuration
//! refresh replaces the whole policy atomically. Consumers that
//! captured a snapshot mid-request keep using it; the next
//! authorization check observes the new one.

pub mod store;
pub mod watcher;

use authz::{Profile, RoleMatcher};
use config::ConsoleConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use authn::{AuthClient, ClientKind};
pub use store::PolicyStore;

/// The composed access-control policy for one configuration load.
///
/// Immutable once built; a configuration refresh builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    clients: Vec<AuthClient>,
    required_role: RoleMatcher,
    callback_url: String,
}

impl AccessPolicy {
    /// The ordered authentication clients protecting the console.
    /// Never empty.
    pub fn clients(&self) -> &[AuthClient] {
        &self.clients
    }

    /// Matcher requiring at least one configured admin role. Fails
    /// closed when no admin roles are configured.
    pub fn required_role(&self) -> &RoleMatcher {
        &self.required_role
    }

    /// The console's own service URL, used as the delegated
    /// authentication callback.
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Convenience for the request-authorization layer: does this
    /// authenticated profile hold an admin role?
    pub fn authorizes(&self, profile: &Profile) -> bool {
        self.required_role.matches(profile)
    }
}

/// Build the access policy for a configuration.
///
/// Asks the authorization layer for the default generator first, then
/// the authentication layer for the client list, injecting the
/// generator bindings per client kind.
pub fn build_policy(config: &ConsoleConfig) -> AccessPolicy {
    let default_generator = authz::select_default_generator(config);
    let clients = authn::build_clients(config, default_generator);
    let required_role = RoleMatcher::any_of(config.admin_roles.iter().cloned());
    let callback_url = callback_url(config);

    debug!(
        "Built access policy with {} client(s), callback [{}]",
        clients.len(),
        callback_url
    );

    AccessPolicy {
        clients,
        required_role,
        callback_url,
    }
}

fn callback_url(config: &ConsoleConfig) -> String {
    format!("{}{}/manage.html", config.server_name, config.context_path)
}
