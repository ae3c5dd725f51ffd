//! Service catalog keyed by service id

use std::collections::HashMap;

use grooming_types::CatalogError;

use super::Service;

/// Immutable set of offered services
///
/// Iteration follows insertion order, which is the display order of the
/// price list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    services: Vec<Service>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(services.len());
        for (position, service) in services.iter().enumerate() {
            if index.insert(service.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateServiceId(service.id.clone()));
            }
        }
        Ok(Self { services, index })
    }

    pub fn get(&self, service_id: &str) -> Option<&Service> {
        self.index.get(service_id).map(|&position| &self.services[position])
    }

    pub fn contains(&self, service_id: &str) -> bool {
        self.index.contains_key(service_id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.services.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
