//! GitHub REST API client module
//!
//! Provides the HTTP client, organization discovery and repository
//! enumeration against the GitHub v3 REST API.

mod client;
pub mod orgs;
pub mod repos;

pub use client::GithubClient;
pub use orgs::{matches_enterprise, Organization};
pub use repos::{is_saml_enforcement, Repository};
