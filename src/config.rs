/// Configuration constants for the GitHub REST API
pub mod api {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.github.com";

    /// Endpoint listing organizations of the authenticated user
    pub const USER_ORGS: &str = "user/orgs";

    /// Media type for the v3 REST API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// User-Agent header, required by the GitHub API
    pub const USER_AGENT: &str = concat!("ghexport/", env!("CARGO_PKG_VERSION"));

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Default values for CLI
pub mod defaults {
    /// Default output workbook file name
    pub const OUTPUT_FILE: &str = "enterprise_repositories.xlsx";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}
