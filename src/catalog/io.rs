//! Catalog persistence
//!
//! Records are stored as a JSON array. Loading is tolerant at the field
//! level (unknown fields ignored, missing fields defaulted) but a file
//! that isn't valid JSON is an error for the caller to surface.

use std::path::Path;

use anyhow::{Context, Result};

use super::record::Record;

pub fn load_catalog(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    let mut records: Vec<Record> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog at {}", path.display()))?;
    // Progress is authoritative for status; re-derive so a hand-edited
    // file can't leave the two disagreeing
    for record in &mut records {
        let progress = record.progress.min(100);
        record.set_progress(progress);
    }
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn save_catalog(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(records).context("Failed to serialize catalog")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write catalog to {}", path.display()))?;
    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::ReadStatus;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut record = Record {
            websign: "1234".to_string(),
            title: "Kept".to_string(),
            tag: "romance".to_string(),
            ..Record::default()
        };
        record.set_progress(60);
        save_catalog(&path, &[record.clone()]).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn test_load_rederives_status_from_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"websign": "1", "progress": 100, "read_status": "unread"}]"#,
        )
        .unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded[0].read_status, ReadStatus::Completed);
        assert_eq!(loaded[0].title, "");
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_catalog(&path).is_err());
        assert!(load_catalog(&dir.path().join("missing.json")).is_err());
    }
}
