//! Organization discovery
//!
//! Lists every organization visible to the token holder and keeps the ones
//! whose login contains the configured enterprise name.

use log::info;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;
use crate::github::GithubClient;

/// Organization as returned by the `user/orgs` endpoint
///
/// Only the login is retained; everything else in the payload is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub login: String,
}

/// Check whether an organization login belongs to the enterprise
///
/// Case-insensitive substring match, mirroring how enterprise-owned
/// organizations are conventionally prefixed with the enterprise name.
pub fn matches_enterprise(login: &str, enterprise: &str) -> bool {
    login.to_lowercase().contains(&enterprise.to_lowercase())
}

impl GithubClient {
    /// List all organizations accessible to the token holder
    pub async fn user_orgs(&self) -> Result<Vec<Organization>> {
        let url = format!(
            "{}/{}?per_page={}",
            self.base_url(),
            api::USER_ORGS,
            api::DEFAULT_PAGE_SIZE
        );
        self.fetch_all_pages(url, "organizations").await
    }

    /// Discover the logins of all organizations belonging to the enterprise
    ///
    /// Result order follows the API's page and within-page order.
    pub async fn discover_orgs(&self, enterprise: &str) -> Result<Vec<String>> {
        info!("Fetching organizations containing '{}'...", enterprise);

        let orgs: Vec<String> = self
            .user_orgs()
            .await?
            .into_iter()
            .map(|org| org.login)
            .filter(|login| matches_enterprise(login, enterprise))
            .collect();

        info!(
            "Fetched {} organizations containing '{}'.",
            orgs.len(),
            enterprise
        );
        Ok(orgs)
    }
}
