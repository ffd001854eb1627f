//! Core authorization types: the authenticated caller's profile and
//! the role matcher evaluated by the request-authorization layer.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// The mutable record of an authenticated caller.
///
/// A profile carries the identity established by an authentication
/// client, the attributes released with it, and the set of roles
/// granted so far. Authorization generators attach roles to it; roles
/// accumulate and are never removed.
///
/// # Security Note
/// Profiles must only be constructed from authenticated requests.
/// The attribute map is trusted input to attribute-derived
/// authorization, so it must come from the authentication layer, never
/// from caller-supplied request data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity of the caller (e.g. a CAS principal or username).
    pub id: String,

    /// Attributes released by the authentication layer. Each attribute
    /// may carry multiple values.
    pub attributes: HashMap<String, Vec<String>>,

    /// Roles granted to this profile so far.
    pub roles: HashSet<String>,
}

impl Profile {
    /// Creates a profile for the given identity with no attributes and
    /// no roles.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
            roles: HashSet::new(),
        }
    }

    /// Creates a profile representing an anonymous caller.
    pub fn anonymous() -> Self {
        Self::new("anonymous")
    }

    /// Builder-style attribute attachment, mostly useful in tests and
    /// at the authentication boundary.
    pub fn with_attribute<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Values of a released attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes.get(name).map(Vec::as_slice)
    }

    /// Grant a single role.
    pub fn add_role(&mut self, role: impl Into<String>) {
        self.roles.insert(role.into());
    }

    /// Grant a batch of roles.
    pub fn add_roles<I, S>(&mut self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for role in roles {
            self.roles.insert(role.into());
        }
    }

    /// Whether the profile holds the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Matcher requiring a profile to hold at least one of a set of roles.
///
/// Evaluated by the request-authorization layer after a client has
/// authenticated a request and its bound generator has populated the
/// profile's roles.
///
/// # Security Note
/// An empty required set fails closed: no profile ever matches. A
/// console configured without admin roles denies everyone rather than
/// admitting anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMatcher {
    required_roles: HashSet<String>,
}

impl RoleMatcher {
    /// Creates a matcher satisfied by any one of the given roles.
    pub fn any_of<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// The roles that satisfy this matcher.
    pub fn required_roles(&self) -> &HashSet<String> {
        &self.required_roles
    }

    /// Whether the profile holds at least one required role.
    ///
    /// Returns `false` for every profile when the required set is
    /// empty.
    pub fn matches(&self, profile: &Profile) -> bool {
        !self.required_roles.is_empty()
            && profile.roles.iter().any(|r| self.required_roles.contains(r))
    }
}
