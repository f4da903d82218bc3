//! CSV domain list loading.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

const DOMAIN_COLUMN: &str = "domain";

/// Loads the domain list from a CSV file.
///
/// A header row with a `domain` column selects that column. Otherwise the
/// first column of every row is read, skipping a literal `domain` cell.
/// Values are trimmed; blanks are dropped. The result is deduplicated and
/// sorted.
///
/// # Errors
///
/// Fails if the file cannot be opened or a row cannot be parsed.
pub fn load_domains_from_csv(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut domains = BTreeSet::new();
    let mut column = 0;
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| {
            format!("Failed to parse row {} of {}", index + 1, path.display())
        })?;
        if index == 0 {
            if let Some(position) = row
                .iter()
                .position(|cell| cell.eq_ignore_ascii_case(DOMAIN_COLUMN))
            {
                column = position;
                continue;
            }
        }
        match row.get(column) {
            Some(cell) if !cell.is_empty() && !cell.eq_ignore_ascii_case(DOMAIN_COLUMN) => {
                domains.insert(cell.to_string());
            }
            _ => {}
        }
    }

    debug!("Loaded {} unique domains from {}", domains.len(), path.display());
    Ok(domains.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_domain_column_selected_by_header() {
        let file = csv_file("rank,domain,notes\n1,b.com,x\n2,a.com,y\n3, b.com ,z\n");
        let domains = load_domains_from_csv(file.path()).unwrap();
        assert_eq!(domains, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_first_column_without_header() {
        let file = csv_file("zeta.org\nalpha.net,extra\n\n  \nalpha.net\n");
        let domains = load_domains_from_csv(file.path()).unwrap();
        assert_eq!(domains, vec!["alpha.net", "zeta.org"]);
    }

    #[test]
    fn test_blank_cells_skipped() {
        let file = csv_file("domain\nexample.com\n\"\"\n   \n");
        let domains = load_domains_from_csv(file.path()).unwrap();
        assert_eq!(domains, vec!["example.com"]);
    }

    #[test]
    fn test_empty_file_yields_no_domains() {
        let file = csv_file("");
        assert!(load_domains_from_csv(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_domains_from_csv(Path::new("/nonexistent/domains.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
