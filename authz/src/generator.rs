//! Authorization generators and the default-generator selection.
//!
//! Exactly three role-granting behaviors exist, so they are modeled as
//! a closed enum rather than an open plugin interface. One of them is
//! selected as the configuration's *default* generator; the static
//! variant may additionally be bound to specific authentication
//! clients regardless of the default.

use std::collections::HashMap;

use config::{properties, ConsoleConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Profile;

/// A policy computing which roles an authenticated profile is granted.
///
/// Generators are pure over their inputs: applying one mutates the
/// profile's role set and nothing else, and roles are only ever added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationGenerator {
    /// Grants a fixed set of roles unconditionally.
    StaticRoles { roles: Vec<String> },

    /// Derives roles from the values of the caller's released
    /// attributes. `target_roles` mirrors the source configuration,
    /// which always leaves it empty; when present its entries are
    /// consulted the same way as the source attributes.
    AttributeDerived {
        source_attributes: Vec<String>,
        target_roles: Vec<String>,
    },

    /// Derives roles from a `username = role1,role2` property map
    /// loaded from the user-properties resource.
    PropertyFileDerived { properties: HashMap<String, String> },
}

impl AuthorizationGenerator {
    /// The static generator seeded with the configured admin roles,
    /// bound to IP-matched and anonymous clients.
    pub fn static_admin_roles(config: &ConsoleConfig) -> Self {
        Self::StaticRoles {
            roles: config.admin_roles.clone(),
        }
    }

    /// Apply this generator to an authenticated profile, adding any
    /// granted roles. Never removes a role and never fails.
    pub fn apply(&self, profile: &mut Profile) {
        match self {
            Self::StaticRoles { roles } => {
                profile.add_roles(roles.iter().cloned());
            }
            Self::AttributeDerived {
                source_attributes,
                target_roles,
            } => {
                let mut granted = Vec::new();
                for name in source_attributes.iter().chain(target_roles.iter()) {
                    if let Some(values) = profile.attribute(name) {
                        for value in values {
                            granted.extend(
                                value
                                    .split(',')
                                    .map(str::trim)
                                    .filter(|r| !r.is_empty())
                                    .map(str::to_string),
                            );
                        }
                    }
                }
                profile.add_roles(granted);
            }
            Self::PropertyFileDerived { properties } => {
                if let Some(value) = properties.get(&profile.id) {
                    let granted: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|r| !r.is_empty())
                        .map(str::to_string)
                        .collect();
                    profile.add_roles(granted);
                }
            }
        }
    }
}

/// Select the default authorization generator for a configuration.
///
/// Precedence, first match wins:
///
/// 1. Authorization attributes contain the literal `"*"`: admin roles
///    are granted unconditionally and attribute checks are bypassed.
/// 2. Authorization attributes are non-empty: roles are derived from
///    the named attributes; no explicit role mapping is configured.
/// 3. Otherwise: roles come from the user-properties resource, which
///    degrades to an empty property set when missing.
///
/// Total over configurations: every state yields exactly one
/// generator.
pub fn select_default_generator(config: &ConsoleConfig) -> AuthorizationGenerator {
    let attributes = &config.authz_attributes;

    if !attributes.is_empty() {
        if attributes.iter().any(|a| a == "*") {
            info!(
                "Wildcard authorization attribute is configured, granting admin roles unconditionally"
            );
            return AuthorizationGenerator::static_admin_roles(config);
        }
        info!(
            "Deriving authorization from profile attributes {:?}",
            attributes
        );
        return AuthorizationGenerator::AttributeDerived {
            source_attributes: attributes.clone(),
            target_roles: Vec::new(),
        };
    }

    let properties = properties::load_user_properties(config.user_properties_file.as_deref());
    AuthorizationGenerator::PropertyFileDerived { properties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn config_with_attributes(attributes: Vec<&str>) -> ConsoleConfig {
        ConsoleConfig {
            admin_roles: vec!["ROLE_ADMIN".to_string()],
            authz_attributes: attributes.into_iter().map(String::from).collect(),
            ..ConsoleConfig::default()
        }
    }

    #[test]
    fn test_wildcard_selects_static_admin_roles() {
        let generator = select_default_generator(&config_with_attributes(vec!["*"]));
        assert_eq!(
            generator,
            AuthorizationGenerator::StaticRoles {
                roles: vec!["ROLE_ADMIN".to_string()]
            }
        );
    }

    #[rstest]
    #[case(vec!["dept", "*"])]
    #[case(vec!["*", "dept", "role"])]
    fn test_wildcard_wins_regardless_of_other_attributes(#[case] attributes: Vec<&str>) {
        let generator = select_default_generator(&config_with_attributes(attributes));
        assert!(matches!(
            generator,
            AuthorizationGenerator::StaticRoles { .. }
        ));
    }

    #[test]
    fn test_attributes_select_attribute_derived_with_empty_mapping() {
        let generator = select_default_generator(&config_with_attributes(vec!["dept", "role"]));
        assert_eq!(
            generator,
            AuthorizationGenerator::AttributeDerived {
                source_attributes: vec!["dept".to_string(), "role".to_string()],
                target_roles: Vec::new(),
            }
        );
    }

    #[test]
    fn test_no_attributes_select_property_file_derived() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alice=admin,ops").unwrap();

        let config = ConsoleConfig {
            user_properties_file: Some(file.path().to_path_buf()),
            ..ConsoleConfig::default()
        };
        let generator = select_default_generator(&config);

        let AuthorizationGenerator::PropertyFileDerived { properties } = generator else {
            panic!("expected the property-file generator");
        };
        assert_eq!(properties.get("alice").unwrap(), "admin,ops");
    }

    #[test]
    fn test_missing_properties_resource_degrades_to_empty() {
        let config = ConsoleConfig {
            user_properties_file: Some("/nonexistent/users.properties".into()),
            ..ConsoleConfig::default()
        };
        let generator = select_default_generator(&config);
        assert_eq!(
            generator,
            AuthorizationGenerator::PropertyFileDerived {
                properties: HashMap::new()
            }
        );
    }

    #[test]
    fn test_static_roles_apply() {
        let generator = AuthorizationGenerator::StaticRoles {
            roles: vec!["ROLE_ADMIN".to_string(), "ROLE_OPS".to_string()],
        };
        let mut profile = Profile::anonymous();
        generator.apply(&mut profile);
        assert!(profile.has_role("ROLE_ADMIN"));
        assert!(profile.has_role("ROLE_OPS"));
    }

    #[test]
    fn test_attribute_derived_apply_splits_values() {
        let generator = AuthorizationGenerator::AttributeDerived {
            source_attributes: vec!["memberOf".to_string()],
            target_roles: Vec::new(),
        };
        let mut profile =
            Profile::new("casuser").with_attribute("memberOf", vec!["ROLE_ADMIN, ROLE_OPS"]);
        generator.apply(&mut profile);
        assert!(profile.has_role("ROLE_ADMIN"));
        assert!(profile.has_role("ROLE_OPS"));
    }

    #[test]
    fn test_attribute_derived_ignores_absent_attributes() {
        let generator = AuthorizationGenerator::AttributeDerived {
            source_attributes: vec!["dept".to_string()],
            target_roles: Vec::new(),
        };
        let mut profile = Profile::new("casuser");
        generator.apply(&mut profile);
        assert!(profile.roles.is_empty());
    }

    #[test]
    fn test_property_file_derived_apply() {
        let mut properties = HashMap::new();
        properties.insert("alice".to_string(), "admin, ops".to_string());

        let generator = AuthorizationGenerator::PropertyFileDerived { properties };

        let mut alice = Profile::new("alice");
        generator.apply(&mut alice);
        assert!(alice.has_role("admin"));
        assert!(alice.has_role("ops"));

        let mut bob = Profile::new("bob");
        generator.apply(&mut bob);
        assert!(bob.roles.is_empty());
    }

    #[test]
    fn test_generators_only_add_roles() {
        let generator = AuthorizationGenerator::StaticRoles { roles: Vec::new() };
        let mut profile = Profile::new("casuser");
        profile.add_role("ROLE_EXISTING");
        generator.apply(&mut profile);
        assert!(profile.has_role("ROLE_EXISTING"));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let config = config_with_attributes(vec!["dept"]);
        assert_eq!(
            select_default_generator(&config),
            select_default_generator(&config)
        );
    }
}
