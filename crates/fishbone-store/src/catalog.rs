//! Catalog loading from JSON
//!
//! The catalog file is an object keyed by category. Each value is either an
//! array of cause records or an object carrying the records under `items` (or
//! `data`), so both a plain export and the per-category module layout load:
//!
//! ```json
//! {
//!   "man": [
//!     {"id": "man-001", "cause": "Kurangnya kesadaran bahaya", "priority": "Critical",
//!      "solutions": ["Job Safety Analysis"], "caseExamples": ["Operator tidak menyadari mesin"]}
//!   ],
//!   "machine": {"items": []}
//! }
//! ```
//!
//! Loading is tolerant: a bad record is skipped with a warning rather than
//! failing the whole catalog.

use crate::error::StoreError;
use fishbone_domain::cause::is_valid_cause_id;
use fishbone_domain::traits::CatalogSource;
use fishbone_domain::{Catalog, Category, Cause};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Separator used when a record lists several case examples
const CASE_EXAMPLE_SEPARATOR: &str = ". ";

/// Parse a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog, StoreError> {
    let value: Value = serde_json::from_str(json)?;
    let categories = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidFormat("Expected a JSON object keyed by category".to_string()))?;

    let mut builder = Catalog::builder();
    for (key, section) in categories {
        let Some(category) = Category::parse(key) else {
            warn!("Unknown catalog category {}, skipping", key);
            continue;
        };
        let Some(records) = section_records(section) else {
            warn!("Catalog category {} has no record array, skipping", key);
            continue;
        };

        builder.category(category);
        for (idx, record) in records.iter().enumerate() {
            let cause = match parse_cause_json(record, category) {
                Ok(cause) => cause,
                Err(e) => {
                    warn!("Failed to parse {} record {}: {}", key, idx, e);
                    continue;
                }
            };
            if let Err(e) = builder.push(cause) {
                warn!("Skipping {} record {}: {}", key, idx, e);
            }
        }
    }

    let catalog = builder.build();
    debug!("Loaded catalog with {} causes", catalog.len());
    Ok(catalog)
}

/// Read and parse a catalog file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, StoreError> {
    let path = path.as_ref();
    debug!("Reading catalog from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents)
}

fn section_records(section: &Value) -> Option<&Vec<Value>> {
    match section {
        Value::Array(records) => Some(records),
        Value::Object(obj) => obj
            .get("items")
            .and_then(Value::as_array)
            .or_else(|| obj.get("data").and_then(Value::as_array)),
        _ => None,
    }
}

/// Parse a single cause record
fn parse_cause_json(json: &Value, category: Category) -> Result<Cause, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Record is not a JSON object".to_string())?;

    let id = non_blank_str(obj, "id").ok_or_else(|| "Missing or invalid 'id'".to_string())?;
    let title = non_blank_str(obj, "cause").ok_or_else(|| "Missing or invalid 'cause'".to_string())?;
    if !is_valid_cause_id(id) {
        warn!("Cause ID {} is not of the form <prefix>-<sequence>", id);
    }

    let mut cause = Cause::new(id, title, category);
    cause.description = non_blank_str(obj, "description").map(str::to_string);
    cause.priority = non_blank_str(obj, "priority").map(str::to_string);
    cause.solutions = string_array(obj, "solutions", id);
    cause.case_example = case_example(obj, id);
    cause.group = non_blank_str(obj, "group")
        .or_else(|| non_blank_str(obj, "category").filter(|label| Category::parse(label).is_none()))
        .map(str::to_string);

    Ok(cause)
}

fn non_blank_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn string_array(obj: &Map<String, Value>, field: &str, id: &str) -> Vec<String> {
    let Some(values) = obj.get(field).and_then(Value::as_array) else {
        return Vec::new();
    };
    values
        .iter()
        .filter_map(|v| {
            let s = v.as_str();
            if s.is_none() {
                warn!("Ignoring non-string entry in {} of {}", field, id);
            }
            s.map(str::to_string)
        })
        .collect()
}

fn case_example(obj: &Map<String, Value>, id: &str) -> Option<String> {
    if let Some(text) = non_blank_str(obj, "caseExample") {
        return Some(text.to_string());
    }
    let examples: Vec<String> = string_array(obj, "caseExamples", id)
        .into_iter()
        .map(|s| s.trim().trim_end_matches('.').to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if examples.is_empty() {
        None
    } else {
        Some(examples.join(CASE_EXAMPLE_SEPARATOR))
    }
}

/// Catalog backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    type Error = StoreError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        load_catalog(&self.path)
    }
}
