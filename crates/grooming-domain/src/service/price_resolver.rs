//! Weight-band resolution
//!
//! The first band whose ceiling is at or above the pet weight applies. A
//! weight above every ceiling falls back to the last band, which silently
//! bills oversized pets at the heaviest tier. [`resolve_band_strict`] reports
//! that case instead.

use grooming_types::PricingError;

use crate::model::{Service, WeightBand};

/// Resolve the applicable band, falling back to the last band
pub fn resolve_band(service: &Service, weight_kg: f64) -> &WeightBand {
    service
        .bands()
        .iter()
        .find(|band| band.covers(weight_kg))
        .unwrap_or_else(|| service.last_band())
}

/// Resolve the applicable band, rejecting invalid or out-of-range weights
pub fn resolve_band_strict(service: &Service, weight_kg: f64) -> Result<&WeightBand, PricingError> {
    let weight_kg = validate_weight(weight_kg)?;
    service
        .bands()
        .iter()
        .find(|band| band.covers(weight_kg))
        .ok_or_else(|| PricingError::WeightOutOfRange {
            service_id: service.id.clone(),
            weight_kg,
            max_kg: service.max_upto_kg(),
        })
}

/// Accept only finite, positive weights
pub fn validate_weight(weight_kg: f64) -> Result<f64, PricingError> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(weight_kg)
    } else {
        Err(PricingError::InvalidWeight(weight_kg))
    }
}
