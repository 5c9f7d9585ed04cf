//! JSON catalog files
//!
//! A catalog file is a JSON array of scenario records using the same field
//! names as the API output. Files are read once at startup.

use std::path::Path;

use super::{Catalog, CatalogError, Scenario};

/// Load and validate a catalog from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_str.clone(),
        source,
    })?;

    let scenarios: Vec<Scenario> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
            path: path_str.clone(),
            source,
        })?;

    let catalog = Catalog::from_scenarios(scenarios)?;
    tracing::info!("Loaded {} scenarios from {}", catalog.len(), path_str);
    Ok(catalog)
}

/// Load from `path` when given, otherwise fall back to the built-in set
pub fn load_or_builtin(path: Option<&str>) -> Result<Catalog, CatalogError> {
    match path {
        Some(p) => load_catalog(p),
        None => {
            let catalog = Catalog::builtin();
            tracing::info!("Using built-in catalog ({} scenarios)", catalog.len());
            Ok(catalog)
        }
    }
}
