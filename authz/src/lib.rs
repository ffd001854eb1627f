//! Role-based authorization for the management console.
//!
//! This crate answers one question per configuration load: given the
//! console's configuration, how does an authenticated profile end up
//! with administrative roles? It defines the core authorization types
//! (`Profile`, `RoleMatcher`) and the closed set of authorization
//! generators, along with the precedence rules that pick the *default*
//! generator for a configuration.
//!
//! # Authorization Flow
//!
//! 1. **Authentication** establishes a caller's `Profile`
//! 2. **A bound generator** adds granted roles to the profile
//! 3. **The role matcher** decides allow/deny from the role set
//!
//! Generators only ever add roles; nothing in this crate removes one.
//!
//! # Fail-secure Default
//!
//! An empty admin-role set produces a matcher that rejects every
//! profile. That is a deliberate outcome, not an error: every
//! configuration state yields a valid, if possibly maximally
//! restrictive, policy.

pub mod generator;
pub mod types;

pub use generator::{select_default_generator, AuthorizationGenerator};
pub use types::{Profile, RoleMatcher};
