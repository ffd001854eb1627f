//! Authentication strategy selection for the management console.
//!
//! Builds the ordered list of authentication clients protecting the
//! console: a delegated CAS client when a server is configured, an
//! IP-matching client when an authorized address pattern is
//! configured, and an anonymous fallback when neither is. Each client
//! carries the authorization generator that grants roles to the
//! profiles it authenticates.
//!
//! Selection performs presence checks only. A CAS client with an empty
//! login URL or an IP client with an invalid pattern is still built;
//! those configuration errors surface when the client is exercised,
//! not when it is selected.

pub mod client;
pub mod error;
mod selector;

pub use client::{AuthClient, ClientKind};
pub use error::{AuthnError, Result};
pub use selector::build_clients;
