//! Run summary printed to stdout after the export

use comfy_table::{presets::NOTHING, Table};

use crate::export::OrgRepos;

/// Print a per-organization summary table
///
/// Organizations with an empty repository list are flagged as skipped, which
/// is what an unauthorized SAML-protected organization degrades to.
pub fn print_summary(results: &OrgRepos) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Org", "Repositories", ""]);

    for (org, repos) in results {
        let note = if repos.is_empty() { "skipped or empty" } else { "" };
        table.add_row(vec![
            org.clone(),
            repos.len().to_string(),
            note.to_string(),
        ]);
    }

    println!("{}", table);
}
