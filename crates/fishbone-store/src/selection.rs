//! Selection persistence
//!
//! A selection is saved as a snapshot carrying the selected IDs together with
//! the display name of every selected category:
//!
//! ```json
//! {"selected": {"man": ["man-001"]}, "categories": {"man": "Manusia"}}
//! ```

use crate::error::StoreError;
use fishbone_domain::category::format_category_name;
use fishbone_domain::traits::SelectionStore;
use fishbone_domain::Selection;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Serialize)]
struct Snapshot<'a> {
    selected: &'a Selection,
    categories: BTreeMap<&'a str, String>,
}

impl<'a> Snapshot<'a> {
    fn new(selection: &'a Selection) -> Self {
        let categories = selection
            .categories()
            .map(|key| (key, format_category_name(key)))
            .collect();
        Self {
            selected: selection,
            categories,
        }
    }
}

/// Selection read leniently from a snapshot
///
/// Keys are visited in document order so the category order survives a
/// save and reload. Non-array values and non-string IDs are skipped.
struct LenientSelection(Selection);

impl<'de> Deserialize<'de> for LenientSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = LenientSelection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category keys to arrays of cause IDs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LenientSelection, A::Error> {
                let mut selection = Selection::new();
                while let Some((category, ids)) = access.next_entry::<String, Value>()? {
                    let Some(ids) = ids.as_array() else {
                        warn!("Selection for {} is not an array, skipping", category);
                        continue;
                    };
                    for id in ids {
                        match id.as_str() {
                            Some(id) => {
                                selection.add(&category, id);
                            }
                            None => warn!("Ignoring non-string cause ID in {}: {}", category, id),
                        }
                    }
                }
                Ok(LenientSelection(selection))
            }
        }

        deserializer.deserialize_map(LenientVisitor)
    }
}

#[derive(Deserialize)]
struct StoredSnapshot {
    #[serde(default)]
    selected: Option<LenientSelection>,
}

/// Parse a snapshot, skipping malformed entries
pub fn parse_snapshot(json: &str) -> Result<Selection, StoreError> {
    let snapshot: StoredSnapshot = serde_json::from_str(json)?;
    snapshot
        .selected
        .map(|lenient| lenient.0)
        .ok_or_else(|| StoreError::InvalidFormat("Missing 'selected' object".to_string()))
}

/// In-process selection store
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    selection: Option<Selection>,
}

impl MemorySelectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    type Error = StoreError;

    fn save(&mut self, selection: &Selection) -> Result<(), Self::Error> {
        self.selection = Some(selection.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Selection>, Self::Error> {
        Ok(self.selection.clone())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.selection = None;
        Ok(())
    }
}

/// Selection store backed by a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonFileSelectionStore {
    path: PathBuf,
}

impl JsonFileSelectionStore {
    /// Create a store persisting to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for JsonFileSelectionStore {
    type Error = StoreError;

    fn save(&mut self, selection: &Selection) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Snapshot::new(selection))?;
        fs::write(&self.path, json)?;
        debug!("Saved {} selected causes to {}", selection.total(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Selection>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        parse_snapshot(&contents).map(Some)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
