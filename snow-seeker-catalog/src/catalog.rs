//! Loading the resort dataset.
//!
//! The catalog is read once at startup, validated, and never mutated
//! afterwards. A dataset ships inside the binary; an external JSON or YAML
//! file can replace it.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use snow_seeker_core::{Resort, SortOrder};
use thiserror::Error;

use crate::query::filter_and_sort;

/// The dataset compiled into the binary.
pub const BUNDLED_RESORTS: &str = include_str!("../data/resorts.json");

/// Source label used in errors for the compiled-in dataset.
const BUNDLED_SOURCE: &str = "<bundled resorts.json>";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("Duplicate resort id in {path}: {id}")]
    DuplicateId { path: String, id: String },
}

/// The immutable, validated list of resorts.
#[derive(Debug, Clone)]
pub struct ResortCatalog {
    resorts: Vec<Resort>,
    index: HashMap<String, usize>,
}

impl ResortCatalog {
    /// Decode the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_named(BUNDLED_RESORTS, BUNDLED_SOURCE)
    }

    /// Decode a JSON array of resorts.
    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        Self::from_json_named(contents, "<json>")
    }

    /// Decode a YAML sequence of resorts.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        Self::from_yaml_named(contents, "<yaml>")
    }

    /// Load a dataset file, picking the decoder from its extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let name = path.display().to_string();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(CatalogError::UnsupportedFormat(name));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: name.clone(),
            source: e,
        })?;

        if ext == "json" {
            Self::from_json_named(&contents, &name)
        } else {
            Self::from_yaml_named(&contents, &name)
        }
    }

    /// Build a catalog from already-decoded records.
    ///
    /// Fails if two records share an id.
    pub fn from_resorts(resorts: Vec<Resort>) -> Result<Self, CatalogError> {
        Self::validated(resorts, "<memory>")
    }

    fn from_json_named(contents: &str, source: &str) -> Result<Self, CatalogError> {
        let resorts: Vec<Resort> =
            serde_json::from_str(contents).map_err(|e| CatalogError::Json {
                path: source.to_string(),
                source: e,
            })?;
        Self::validated(resorts, source)
    }

    fn from_yaml_named(contents: &str, source: &str) -> Result<Self, CatalogError> {
        let resorts: Vec<Resort> =
            serde_yml::from_str(contents).map_err(|e| CatalogError::Yaml {
                path: source.to_string(),
                source: e,
            })?;
        Self::validated(resorts, source)
    }

    fn validated(resorts: Vec<Resort>, source: &str) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(resorts.len());
        for (position, resort) in resorts.iter().enumerate() {
            if index.insert(resort.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    path: source.to_string(),
                    id: resort.id.clone(),
                });
            }
        }
        log::debug!("Loaded {} resorts from {}", resorts.len(), source);
        Ok(Self { resorts, index })
    }

    /// All resorts in catalog order.
    pub fn resorts(&self) -> &[Resort] {
        &self.resorts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resort> {
        self.resorts.iter()
    }

    /// Look up a resort by id.
    pub fn get(&self, id: &str) -> Option<&Resort> {
        self.index.get(id).map(|&i| &self.resorts[i])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.resorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resorts.is_empty()
    }

    /// Distinct country names, sorted.
    pub fn countries(&self) -> Vec<&str> {
        self.resorts
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Run the query pipeline over this catalog.
    pub fn query(&self, query: &str, sort: SortOrder) -> Vec<&Resort> {
        filter_and_sort(&self.resorts, query, sort)
    }
}
