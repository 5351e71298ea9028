//! ghexport - Main entry point

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use ghexport::{print_summary, write_workbook, Cli, GithubClient, OrgRepos};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ghexport v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: enterprise={}, output={}, api_url={}",
        cli.enterprise, cli.output, cli.api_url
    );

    let client = GithubClient::new(cli.token.clone(), cli.api_url.clone());

    // Step 1: discover enterprise organizations
    let organizations = client.discover_orgs(&cli.enterprise).await?;
    debug!(
        "Processing {} organizations: {:?}",
        organizations.len(),
        organizations
    );

    // Step 2: enumerate repositories, one organization at a time
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut results: OrgRepos = Vec::with_capacity(organizations.len());
    for org in organizations {
        spinner.set_message(format!("Fetching repositories for {}...", org));
        let repos = client.org_repos(&org).await?;
        results.push((org, repos));
    }
    spinner.finish_with_message("Repositories fetched successfully!");

    // Step 3: export and summarize
    write_workbook(&results, &cli.output)?;
    print_summary(&results);

    info!("Completed successfully");
    Ok(())
}
