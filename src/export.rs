//! Workbook export
//!
//! Turns the organization -> repositories mapping into a single-sheet
//! `.xlsx` workbook: one column per organization, header row of organization
//! logins, shorter columns padded with blank cells.

use log::info;
use rust_xlsxwriter::Workbook;

use crate::error::Result;

/// Ordered organization -> repository-names mapping
///
/// Column order of the export follows the order of this vec, which in turn
/// follows discovery order.
pub type OrgRepos = Vec<(String, Vec<String>)>;

/// Build the row-major grid for the workbook
///
/// Returns the header row (organization logins) and the data rows, padded
/// with empty strings up to the longest repository list.
pub fn build_table(results: &OrgRepos) -> (Vec<String>, Vec<Vec<String>>) {
    let headers: Vec<String> = results.iter().map(|(org, _)| org.clone()).collect();
    let depth = results.iter().map(|(_, repos)| repos.len()).max().unwrap_or(0);

    let rows = (0..depth)
        .map(|row| {
            results
                .iter()
                .map(|(_, repos)| repos.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    (headers, rows)
}

/// Write the mapping to an `.xlsx` workbook at `path`
///
/// No index column is written; blank cells stay truly empty.
pub fn write_workbook(results: &OrgRepos, path: &str) -> Result<()> {
    info!("Saving repositories to Excel file: {}", path);

    let (headers, rows) = build_table(results);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
            }
        }
    }

    workbook.save(path)?;
    info!("Repositories saved to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn sample() -> OrgRepos {
        vec![
            ("org-a".to_string(), vec!["r1".to_string(), "r2".to_string()]),
            ("org-b".to_string(), vec!["r3".to_string()]),
        ]
    }

    #[test]
    fn test_build_table_pads_short_columns() {
        let (headers, rows) = build_table(&sample());

        assert_eq!(headers, vec!["org-a", "org-b"]);
        assert_eq!(
            rows,
            vec![
                vec!["r1".to_string(), "r3".to_string()],
                vec!["r2".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_build_table_empty_mapping() {
        let (headers, rows) = build_table(&Vec::new());
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_build_table_skipped_org_keeps_column() {
        let results: OrgRepos = vec![
            ("org-a".to_string(), vec!["r1".to_string()]),
            ("org-skipped".to_string(), Vec::new()),
        ];
        let (headers, rows) = build_table(&results);

        assert_eq!(headers, vec!["org-a", "org-skipped"]);
        assert_eq!(rows, vec![vec!["r1".to_string(), String::new()]]);
    }

    #[test]
    fn test_workbook_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let path_str = path.to_str().unwrap();

        write_workbook(&sample(), path_str).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(path_str).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();

        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("org-a".to_string()))
        );
        assert_eq!(
            range.get_value((0, 1)),
            Some(&Data::String("org-b".to_string()))
        );
        assert_eq!(
            range.get_value((1, 0)),
            Some(&Data::String("r1".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("r3".to_string()))
        );
        assert_eq!(
            range.get_value((2, 0)),
            Some(&Data::String("r2".to_string()))
        );
        // Padded cell stays blank
        assert!(!matches!(range.get_value((2, 1)), Some(Data::String(_))));
    }
}
