//! Catalog shipped with the binary, used when no catalog file is configured

use grooming_domain::model::Catalog;
use grooming_infra::catalog_loader::CatalogLoader;
use grooming_types::Result;

const BUILTIN_CATALOG_TOML: &str = include_str!("../../data/builtin_catalog.toml");

/// Parse the embedded catalog
pub fn builtin_catalog() -> Result<Catalog> {
    CatalogLoader::load_from_toml_str(BUILTIN_CATALOG_TOML)
}
