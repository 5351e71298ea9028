//! Repository enumeration
//!
//! Lists every repository (public and private) of an organization. An
//! organization protected by unauthorized SAML enforcement is skipped with
//! an empty result instead of aborting the run.

use log::{error, info};
use serde::Deserialize;

use crate::config::api;
use crate::error::{GhError, Result};
use crate::github::GithubClient;

/// Repository as returned by the `orgs/{org}/repos` endpoint
///
/// Only the name is retained.
#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    pub name: String,
}

/// Detect the SAML enforcement rejection
///
/// GitHub answers 403 with a body mentioning SAML when a personal access
/// token has not been authorized for an organization with SAML SSO enabled.
/// Isolated here so the detection can evolve without touching control flow.
pub fn is_saml_enforcement(status: u16, body: &str) -> bool {
    status == 403 && body.contains("SAML")
}

impl GithubClient {
    /// List all repository names of an organization, public and private
    ///
    /// Returns an empty list when the organization rejects the token due to
    /// SAML enforcement; any other API failure propagates.
    pub async fn org_repos(&self, org: &str) -> Result<Vec<String>> {
        info!("Fetching all repositories for the organization: {}...", org);

        let url = format!(
            "{}/orgs/{}/repos?type=all&per_page={}",
            self.base_url(),
            org,
            api::DEFAULT_PAGE_SIZE
        );
        let context = format!("repositories for {}", org);

        let repos: Vec<Repository> = match self.fetch_all_pages(url, &context).await {
            Ok(repos) => repos,
            Err(GhError::Api { status, ref body }) if is_saml_enforcement(status, body) => {
                error!("SAML enforcement error for {}. Please authorize your PAT.", org);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        info!(
            "Fetched {} repositories for the organization: {}.",
            repos.len(),
            org
        );
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }
}
