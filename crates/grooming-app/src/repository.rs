//! Adapters that open the catalog and time-slot sources named by the config

use std::path::PathBuf;

use grooming_domain::model::Catalog;
use grooming_domain::repository::CatalogRepository;
use grooming_domain::service::time_slots_or_default;
use grooming_infra::persistence::FileCatalogRepository;
use grooming_infra::translation_source::TranslationSource;
use grooming_types::Result;

use crate::config::Config;
use crate::constants::builtin_catalog;

/// Open file-based catalog repository
pub fn open_catalog_repo(path: PathBuf) -> Result<FileCatalogRepository> {
    FileCatalogRepository::new(path)
}

/// Catalog from the configured file, or the built-in one
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => open_catalog_repo(path.clone())?.catalog(),
        None => {
            tracing::debug!("no catalog file configured, using built-in catalog");
            builtin_catalog()
        }
    }
}

/// Appointment slots from the configured translations, or the hourly defaults
///
/// A configured translations file that cannot be read is an error; one that
/// lacks usable slots is not.
pub fn open_time_slots(config: &Config) -> Result<Vec<String>> {
    let source = match &config.translations_path {
        Some(path) => TranslationSource::load_from_file(path)?,
        None => TranslationSource::default(),
    };

    if source.time_slots().is_none() {
        tracing::debug!("no booking.timeSlots in translations, generating defaults");
    }
    Ok(time_slots_or_default(source.time_slots()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_catalog_defaults_to_builtin() {
        let catalog = open_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_open_catalog_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"services": [{"id": "nail_care", "title": "Nail Care",
                "bands": [{"label": "All sizes", "upto_kg": 999, "price": 12}]}]}"#,
        )
        .unwrap();

        let config = Config {
            catalog_path: Some(path),
            ..Config::default()
        };
        let catalog = open_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("nail_care").map(|s| s.last_band().price), Some(12));
    }

    #[test]
    fn test_open_time_slots_without_translations() {
        let slots = open_time_slots(&Config::default()).unwrap();
        assert_eq!(slots.len(), 10);
    }

    #[test]
    fn test_open_time_slots_from_translations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("de.json");
        fs::write(&path, r#"{"booking": {"timeSlots": ["09:30", "13:30"]}}"#).unwrap();

        let config = Config {
            translations_path: Some(path),
            ..Config::default()
        };
        assert_eq!(open_time_slots(&config).unwrap(), vec!["09:30", "13:30"]);
    }

    #[test]
    fn test_open_time_slots_missing_file_is_error() {
        let config = Config {
            translations_path: Some(PathBuf::from("/nonexistent/en.json")),
            ..Config::default()
        };
        assert!(open_time_slots(&config).is_err());
    }
}
