//! ghexport - Export GitHub enterprise repositories to Excel
//!
//! A CLI tool that discovers every organization of a GitHub enterprise
//! (substring match on the organization login), enumerates all repositories
//! of each, and writes the result to a one-sheet `.xlsx` workbook with one
//! column per organization.
//!
//! # Example
//!
//! ```bash
//! # Export all repos of organizations whose login contains "acme"
//! ghexport --enterprise acme --token ghp_xxx
//!
//! # Custom output file and verbose logging
//! ghexport -e acme -t ghp_xxx -o acme_repos.xlsx -l debug
//!
//! # Token and enterprise can also come from the environment
//! GITHUB_PAT=ghp_xxx GITHUB_ENTERPRISE=acme ghexport
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod output;

pub use cli::Cli;
pub use error::{GhError, Result};
pub use export::{build_table, write_workbook, OrgRepos};
pub use github::{is_saml_enforcement, matches_enterprise, GithubClient, Organization, Repository};
pub use output::print_summary;
