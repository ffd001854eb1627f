//! Authentication client descriptors.

use authz::AuthorizationGenerator;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AuthnError, Result};

/// The authentication strategy a client implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientKind {
    /// Delegates authentication to a CAS server's login endpoint.
    DelegatedCas { login_url: String },

    /// Authenticates callers whose IP address matches a configured
    /// regular expression. The pattern is the sole credential test.
    IpMatch { pattern: String },

    /// Establishes an anonymous identity with no credential check.
    Anonymous,
}

/// An authentication client descriptor bound to the authorization
/// generator that grants roles to the profiles it authenticates.
///
/// Descriptors are constructed once per configuration load, immutable
/// thereafter, and discarded wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClient {
    name: String,
    kind: ClientKind,
    generator: AuthorizationGenerator,
}

impl AuthClient {
    pub fn new(
        name: impl Into<String>,
        kind: ClientKind,
        generator: AuthorizationGenerator,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            generator,
        }
    }

    /// Unique client name, used as discriminator by the request layer.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ClientKind {
        &self.kind
    }

    /// The generator that populates roles on profiles this client
    /// authenticates.
    pub fn generator(&self) -> &AuthorizationGenerator {
        &self.generator
    }

    /// Login URL for redirect construction.
    ///
    /// # Errors
    ///
    /// `MissingLoginUrl` when the delegated CAS client was configured
    /// without one; `UnsupportedOperation` for other client kinds.
    pub fn login_url(&self) -> Result<&str> {
        match &self.kind {
            ClientKind::DelegatedCas { login_url } if !login_url.is_empty() => Ok(login_url),
            ClientKind::DelegatedCas { .. } => Err(AuthnError::MissingLoginUrl),
            _ => Err(AuthnError::UnsupportedOperation(self.name.clone())),
        }
    }

    /// Credential test for the IP client: does the caller's address
    /// match the configured pattern?
    ///
    /// The pattern is compiled here, on use, so an invalid expression
    /// fails at authentication time rather than at selection time.
    ///
    /// # Errors
    ///
    /// `InvalidIpPattern` when the configured pattern does not compile;
    /// `UnsupportedOperation` for other client kinds.
    pub fn matches_ip(&self, remote_addr: &str) -> Result<bool> {
        match &self.kind {
            ClientKind::IpMatch { pattern } => {
                let regex = Regex::new(pattern)?;
                Ok(regex.is_match(remote_addr))
            }
            _ => Err(AuthnError::UnsupportedOperation(self.name.clone())),
        }
    }
}
