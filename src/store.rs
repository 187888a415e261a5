//! JSON document storage for sheets.
//!
//! One pretty-printed JSON file per sheet, named `<sheet-id>.json` inside
//! the store directory. Saves publish atomically: the document is written to
//! a `.tmp` sibling and renamed over the target, so a reader never observes
//! a partially written sheet.

use crate::fs;
use crate::model::Sheet;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const SHEET_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// The persistence gateway: a directory of sheet documents keyed by id.
#[derive(Debug, Clone)]
pub struct SheetStore {
    dir: PathBuf,
}

impl SheetStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).context("Unable to create the sheet store directory")?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The document path for a sheet id.
    pub fn sheet_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.{SHEET_EXTENSION}"))
    }

    /// Saves a sheet, overwriting any existing document with the same id.
    /// Write-then-rename keeps partially written documents invisible.
    pub fn save(&self, sheet: &Sheet) -> Result<()> {
        let path = self.sheet_path(sheet.id());
        let json = serde_json::to_string_pretty(sheet)
            .with_context(|| format!("Failed to serialize sheet '{}' to JSON", sheet.name()))?;
        let tmp = path.with_extension(format!("{SHEET_EXTENSION}.{TMP_SUFFIX}"));
        fs::write_all(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        debug!("Saved sheet '{}' to {}", sheet.name(), path.display());
        Ok(())
    }

    /// Loads every sheet document in the store directory. A document that
    /// cannot be read or parsed is skipped with a warning rather than
    /// aborting the load. The result is sorted by name, then id, so callers
    /// see a deterministic order.
    pub fn load_all(&self) -> Result<Vec<Sheet>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("Unable to read directory {}", self.dir.display()))?;

        let mut sheets = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Unable to read an entry in {}", self.dir.display()))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SHEET_EXTENSION) {
                continue;
            }
            match load_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => warn!("Skipping sheet document {}: {e:#}", path.display()),
            }
        }

        sheets.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        debug!("Loaded {} sheet(s) from {}", sheets.len(), self.dir.display());
        Ok(sheets)
    }
}

fn load_sheet(path: &Path) -> Result<Sheet> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, TxnKind};
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;
    use tempfile::TempDir;

    fn sample_sheet(name: &str) -> Sheet {
        let mut sheet = Sheet::new(name);
        let groceries = sheet.add_category("Groceries");
        sheet.add_transaction(
            Some(groceries),
            "weekly shop",
            Amount::from_str("41.99").unwrap(),
            TxnKind::Expense,
            Some(Utc.with_ymd_and_hms(2024, 1, 20, 18, 0, 0).unwrap()),
        );
        sheet.add_transaction(
            None,
            "paycheck",
            Amount::from_str("2500").unwrap(),
            TxnKind::Income,
            Some(Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap()),
        );
        sheet
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        let sheet = sample_sheet("Household");
        store.save(&sheet).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![sheet]);
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        let mut sheet = sample_sheet("Household");
        store.save(&sheet).unwrap();
        sheet.set_name("Renamed");
        store.save(&sheet).unwrap();

        // One document per id, reflecting the latest save.
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Renamed");
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        store.save(&sample_sheet("s")).unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(TMP_SUFFIX))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_load_all_skips_bad_documents() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        store.save(&sample_sheet("Good")).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Good");
    }

    #[test]
    fn test_load_all_is_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        store.save(&sample_sheet("Bravo")).unwrap();
        store.save(&sample_sheet("Alpha")).unwrap();
        store.save(&sample_sheet("Charlie")).unwrap();

        let names: Vec<String> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sheets");
        let store = SheetStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(store.load_all().unwrap().is_empty());
    }
}
