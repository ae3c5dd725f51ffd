//! Infrastructure layer - catalog loaders and file-backed repositories

pub mod catalog_loader;
pub mod persistence;
pub mod translation_source;
