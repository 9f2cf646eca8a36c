//! Known Model Catalog - the closed set of models a recommendation may name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::foundation::ValidationError;

/// A model the service knows how to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Model identifier, e.g. "C-Class".
    pub id: String,
    pub description: String,
    pub image_url: String,
    /// Short hint for image search / alt text.
    pub image_hint: String,
}

/// Read-only lookup set of valid model identifiers.
///
/// Loaded once at startup and shared; membership is an exact string match.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl ModelCatalog {
    /// Builds a catalog, rejecting empty catalogs, blank ids and duplicates.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::empty_field("catalog"));
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(ValidationError::empty_field("model id"));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ValidationError::duplicate("model id", &entry.id));
            }
        }

        Ok(Self { entries, index })
    }

    /// Parses and validates a JSON array of catalog entries.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("catalog", e.to_string()))?;
        Self::new(entries)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::invalid_format("catalog", format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Result<Self, ValidationError> {
        Self::from_json(include_str!("../../../data/catalog.json"))
    }

    pub fn contains(&self, model: &str) -> bool {
        self.index.contains_key(model)
    }

    pub fn get(&self, model: &str) -> Option<&CatalogEntry> {
        self.index.get(model).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Model ids in catalog order.
    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
