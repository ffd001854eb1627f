//! Configuration for the management console access-control bootstrap.
//!
//! The console's configuration is a small YAML document describing how
//! the console is protected: a delegated CAS server, an authorized IP
//! pattern, the set of administrative roles, and how those roles are
//! granted to an authenticated caller. This crate only models and
//! loads that document; deciding what an absent field means is the job
//! of the selection layers in the `authn` and `authz` crates, which
//! perform presence checks and fall through to defaults rather than
//! raising errors.

pub mod error;
pub mod properties;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use error::{ConfigError, Result};

/// Console access-control configuration.
///
/// All fields default to their "absent" state so a partially written
/// configuration file (or none at all) still deserializes; the
/// selection algorithms treat empty strings and lists as "not
/// configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the CAS server protecting the console. Empty means
    /// no delegated authentication is configured.
    pub server_name: String,

    /// Login URL of the CAS server. Required in practice when
    /// `server_name` is set, but not validated at load or selection
    /// time; an empty value surfaces as an error only when the
    /// delegated client is exercised.
    pub login_url: String,

    /// Context path the console is deployed under, used to derive the
    /// console's callback URL.
    pub context_path: String,

    /// Regular expression matched against the caller's IP address.
    /// Empty means no IP-based authentication is configured. Pattern
    /// validity is checked only when the IP client is exercised.
    pub authz_ip_regex: String,

    /// Role names that grant administrative access to the console.
    pub admin_roles: Vec<String>,

    /// Profile attribute names consulted for authorization. A literal
    /// `"*"` entry means admin roles are granted unconditionally.
    pub authz_attributes: Vec<String>,

    /// Optional path to a `username = role1,role2` properties file
    /// used for role assignment when no authorization attributes are
    /// configured.
    pub user_properties_file: Option<PathBuf>,
}

impl ConsoleConfig {
    /// Parse a configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Whether a delegated CAS server is configured.
    pub fn has_server_name(&self) -> bool {
        !self.server_name.is_empty()
    }

    /// Whether an authorized IP pattern is configured.
    pub fn has_ip_regex(&self) -> bool {
        !self.authz_ip_regex.is_empty()
    }
}
