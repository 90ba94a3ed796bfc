// City catalog: the read-only city -> cafés mapping every request is served from.
// Built once at startup, either from the bundled data set or from a TOML file.

use std::{collections::HashMap, path::Path};

use serde::Deserialize;

static BUILTIN_CATALOG: &str = include_str!("../../data/cities.toml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

// TOML file content
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: HashMap<String, Vec<String>>,
}

/// Immutable mapping from a city name to its ordered list of café names.
#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    cities: HashMap<String, Vec<String>>,
}

impl CityCatalog {
    pub fn new(cities: HashMap<String, Vec<String>>) -> Self {
        Self { cities }
    }

    /// The data set shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.cities))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml_str(&content)?;

        tracing::info!(
            "Loaded {} cities from {}",
            catalog.len(),
            path.as_ref().display()
        );

        Ok(catalog)
    }

    /// Loads `path` when given, the built-in data set otherwise.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No catalog file given, using built-in catalog");
                Self::builtin()
            }
        }
    }

    pub fn get(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// City names, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
