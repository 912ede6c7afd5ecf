use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Reads one identifier per record from CSV data: the first field, trimmed. Records whose first
/// field is empty are skipped. If `has_header` is set the first record is skipped too.
pub fn read_identifiers<R: Read>(reader: R, has_header: bool) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut identifiers = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed record {}", line + 1))?;
        match record.get(0).map(str::trim) {
            Some(id) if !id.is_empty() => identifiers.push(id.to_string()),
            _ => continue,
        }
    }
    Ok(identifiers)
}

/// Reads identifiers from the CSV file at `path`.
pub fn read_identifiers_from_path(path: &Path, has_header: bool) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let identifiers = read_identifiers(file, has_header)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("read {} identifiers from {}", identifiers.len(), path.display());
    Ok(identifiers)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_skips_header() {
        let data = "email\na@x.com\nb@x.com\n";
        let ids = read_identifiers(data.as_bytes(), true).unwrap();
        assert_eq!(ids, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_keeps_first_record_without_header() {
        let data = "a@x.com\nb@x.com";
        let ids = read_identifiers(data.as_bytes(), false).unwrap();
        assert_eq!(ids, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_first_field_trimmed() {
        let data = "email,name\n  a@x.com ,Alice\nb@x.com,Bob,extra\n,nobody\n";
        let ids = read_identifiers(data.as_bytes(), true).unwrap();
        assert_eq!(ids, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_identifiers("".as_bytes(), true).unwrap().is_empty());
        assert!(read_identifiers("email\n".as_bytes(), true).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_identifiers_from_path(Path::new("/nonexistent/db.csv"), true).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/db.csv"));
    }
}
