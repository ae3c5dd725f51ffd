//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use grooming_domain::model::{Catalog, Service};
use grooming_domain::repository::CatalogRepository;
use grooming_types::Error;

use crate::catalog_loader::CatalogLoader;

/// File-based catalog repository (TOML or JSON)
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl FileCatalogRepository {
    /// Create a new repository from a catalog file path
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let catalog = CatalogLoader::load_from_file(&path)?;
        Ok(Self { path, catalog })
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload data from the file
    ///
    /// On failure the previously loaded catalog is kept.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = CatalogLoader::load_from_file(&self.path)?;
        Ok(())
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn find_all(&self) -> Result<Vec<Service>, Error> {
        Ok(self.catalog.services().to_vec())
    }

    fn find_by_id(&self, service_id: &str) -> Result<Option<Service>, Error> {
        Ok(self.catalog.get(service_id).cloned())
    }

    fn catalog(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ONE_SERVICE: &str = r#"
[[services]]
id = "teeth_cleaning"
title = "Teeth Cleaning"
bands = [{ label = "All sizes", upto_kg = 999, price = 20 }]
"#;

    const TWO_SERVICES: &str = r#"
[[services]]
id = "teeth_cleaning"
title = "Teeth Cleaning"
bands = [{ label = "All sizes", upto_kg = 999, price = 22 }]

[[services]]
id = "nail_care"
title = "Nail Care"
bands = [{ label = "All sizes", upto_kg = 999, price = 15 }]
"#;

    #[test]
    fn test_find_all_and_by_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, TWO_SERVICES).unwrap();

        let repo = FileCatalogRepository::new(path.clone()).unwrap();
        assert_eq!(repo.path(), path.as_path());
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert_eq!(
            repo.find_by_id("nail_care").unwrap().map(|s| s.title),
            Some("Nail Care".to_string())
        );
        assert!(repo.find_by_id("deluxe_spa").unwrap().is_none());
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, ONE_SERVICE).unwrap();

        let mut repo = FileCatalogRepository::new(path.clone()).unwrap();
        assert_eq!(repo.catalog().unwrap().len(), 1);

        fs::write(&path, TWO_SERVICES).unwrap();
        repo.reload().unwrap();
        let catalog = repo.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("teeth_cleaning").map(|s| s.last_band().price), Some(22));
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, ONE_SERVICE).unwrap();

        let mut repo = FileCatalogRepository::new(path.clone()).unwrap();
        fs::write(&path, "not = [valid").unwrap();
        assert!(repo.reload().is_err());
        assert_eq!(repo.catalog().unwrap().len(), 1);
    }
}
