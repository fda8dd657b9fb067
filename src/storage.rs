// Output persistence: one pretty-printed JSON array per run.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::model::{NormalizedRecord, StorageError};

/// Serializes the records to `path`. The artifact is always a top-level
/// array, `[]` included; serde_json leaves non-ASCII text unescaped.
pub fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(records)?)?;
    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

fn render(records: &[NormalizedRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_renders_an_array_literal() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn vietnamese_text_stays_unescaped() {
        use crate::assembler;
        use crate::enricher::Enrichment;

        let listing = serde_json::from_value(serde_json::json!({"name": "Quán Cô Ba"})).unwrap();
        let record = assembler::assemble(&listing, Enrichment::default());
        let json = render(&[record]).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("Quán Cô Ba"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn record_serializes_with_the_full_key_set() {
        use crate::assembler;
        use crate::enricher::Enrichment;

        let listing = serde_json::from_value(serde_json::json!({"name": "x"})).unwrap();
        let record = assembler::assemble(&listing, Enrichment::default());
        let value = serde_json::to_value(&record).unwrap();
        let map = value.as_object().unwrap();
        for key in [
            "name",
            "address",
            "locate",
            "geojson",
            "imgs",
            "rating",
            "ratingCount",
            "districtName",
            "cityName",
            "type",
            "openHour",
            "price",
            "avgUnit",
            "categories",
            "phones",
            "exts",
            "description",
        ] {
            assert!(map.contains_key(key), "missing {key}");
        }
        assert_eq!(map["openHour"].as_object().unwrap().len(), 7);
    }
}
