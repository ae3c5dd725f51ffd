//! Catalog loader for TOML and JSON fixture files
//!
//! Both formats share one document shape:
//!
//! ```toml
//! [[services]]
//! id = "nail_care"
//! title = "Nail Care"
//! bands = [{ label = "All sizes", upto_kg = 999, price = 15 }]
//! ```

use grooming_domain::model::{Catalog, Service};
use grooming_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for parsing catalog files
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    services: Vec<Service>,
}

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(CatalogFormat::Toml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Loads and validates catalogs
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file, choosing the parser by extension
    pub fn load_from_file(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            Error::Config(ConfigError::ParseError(format!(
                "Unsupported catalog file extension: {} (expected .toml or .json)",
                path.display()
            )))
        })?;

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read catalog file: {}",
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), ?format, "loading catalog");

        let catalog = match format {
            CatalogFormat::Toml => Self::load_from_toml_str(&content)?,
            CatalogFormat::Json => Self::load_from_json_str(&content)?,
        };

        tracing::info!(path = %path.display(), services = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from TOML text
    pub fn load_from_toml_str(toml_content: &str) -> Result<Catalog> {
        let document: CatalogDocument = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse catalog TOML: {}",
                e
            )))
        })?;
        Ok(Catalog::new(document.services)?)
    }

    /// Load a catalog from JSON text
    pub fn load_from_json_str(json_content: &str) -> Result<Catalog> {
        let document: CatalogDocument = serde_json::from_str(json_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse catalog JSON: {}",
                e
            )))
        })?;
        Ok(Catalog::new(document.services)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grooming_types::CatalogError;
    use std::io::Write;
    use tempfile::Builder;

    const TEST_TOML: &str = r#"
[[services]]
id = "full_grooming"
title = "Full Grooming"
duration = "2-3 hours"
popular = true
features = ["Professional haircut & styling", "Nail trimming & filing"]
bands = [
    { label = "Up to 10 kg", upto_kg = 10, price = 45 },
    { label = "11-25 kg", upto_kg = 25, price = 55 },
    { label = "26-40 kg", upto_kg = 40, price = 70 },
]

[[services]]
id = "nail_care"
title = "Nail Care"
bands = [{ label = "All sizes", upto_kg = 999, price = 15 }]
"#;

    const TEST_JSON: &str = r#"{
  "services": [
    {
      "id": "full_grooming",
      "title": "Full Grooming",
      "duration": "2-3 hours",
      "popular": true,
      "features": ["Professional haircut & styling", "Nail trimming & filing"],
      "bands": [
        { "label": "Up to 10 kg", "upto_kg": 10, "price": 45 },
        { "label": "11-25 kg", "upto_kg": 25, "price": 55 },
        { "label": "26-40 kg", "upto_kg": 40, "price": 70 }
      ]
    },
    {
      "id": "nail_care",
      "title": "Nail Care",
      "bands": [{ "label": "All sizes", "upto_kg": 999, "price": 15 }]
    }
  ]
}"#;

    #[test]
    fn test_load_from_toml_str() {
        let catalog = CatalogLoader::load_from_toml_str(TEST_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        let service = catalog.get("full_grooming").unwrap();
        assert!(service.popular);
        assert_eq!(service.bands()[1].price, 55);
    }

    #[test]
    fn test_toml_and_json_agree() {
        let from_toml = CatalogLoader::load_from_toml_str(TEST_TOML).unwrap();
        let from_json = CatalogLoader::load_from_json_str(TEST_JSON).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_invalid_bands_rejected() {
        let toml = r#"
[[services]]
id = "deluxe_spa"
title = "Deluxe Spa"
bands = [
    { label = "26-40 kg", upto_kg = 40, price = 95 },
    { label = "Up to 25 kg", upto_kg = 25, price = 75 },
]
"#;
        let result = CatalogLoader::load_from_toml_str(toml);
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[[services]]
id = "nail_care"
title = "Nail Care"
bands = [{ label = "All sizes", upto_kg = 999, price = 15 }]

[[services]]
id = "nail_care"
title = "Nail Care Deluxe"
bands = [{ label = "All sizes", upto_kg = 999, price = 18 }]
"#;
        let result = CatalogLoader::load_from_toml_str(toml);
        assert!(matches!(
            result,
            Err(Error::Catalog(CatalogError::DuplicateServiceId(ref id))) if id == "nail_care"
        ));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(TEST_JSON.as_bytes()).unwrap();

        let catalog = CatalogLoader::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_unsupported_extension() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"services: []").unwrap();

        let result = CatalogLoader::load_from_file(file.path());
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_file() {
        let result = CatalogLoader::load_from_file(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
