//! Caller-chosen services for one pet weight

use serde::Serialize;

/// Set of selected service ids plus the shared pet weight
///
/// Ids keep the order in which they were first selected and appear at most
/// once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub weight_kg: f64,
    service_ids: Vec<String>,
}

impl Selection {
    pub fn new(weight_kg: f64) -> Self {
        Self {
            weight_kg,
            service_ids: Vec::new(),
        }
    }

    /// Build a selection from ids, dropping repeats
    pub fn with_services<I, S>(weight_kg: f64, service_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new(weight_kg);
        for id in service_ids {
            selection.insert(id);
        }
        selection
    }

    /// Add an id; returns false if it was already selected
    pub fn insert(&mut self, service_id: impl Into<String>) -> bool {
        let service_id = service_id.into();
        if self.contains(&service_id) {
            return false;
        }
        self.service_ids.push(service_id);
        true
    }

    /// Remove an id; returns false if it was not selected
    pub fn remove(&mut self, service_id: &str) -> bool {
        let before = self.service_ids.len();
        self.service_ids.retain(|id| id != service_id);
        self.service_ids.len() != before
    }

    /// Checkbox semantics: checked adds, unchecked removes
    pub fn toggle(&mut self, service_id: &str, checked: bool) {
        if checked {
            self.insert(service_id);
        } else {
            self.remove(service_id);
        }
    }

    pub fn contains(&self, service_id: &str) -> bool {
        self.service_ids.iter().any(|id| id == service_id)
    }

    pub fn service_ids(&self) -> &[String] {
        &self.service_ids
    }

    pub fn len(&self) -> usize {
        self.service_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.service_ids.is_empty()
    }
}
