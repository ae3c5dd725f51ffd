//! Repository trait definitions for catalog data

use grooming_types::Error;

use crate::model::{Catalog, Service};

/// Read-only source of the service catalog
pub trait CatalogRepository {
    /// All services in display order
    fn find_all(&self) -> Result<Vec<Service>, Error>;

    /// Find a service by its id
    fn find_by_id(&self, service_id: &str) -> Result<Option<Service>, Error>;

    /// The whole catalog
    fn catalog(&self) -> Result<Catalog, Error>;
}
