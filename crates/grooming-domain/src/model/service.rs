//! Grooming service with weight-banded prices

use grooming_types::CatalogError;
use serde::{Deserialize, Serialize};

use super::WeightBand;

/// A bookable grooming service
///
/// `bands` is only reachable through [`Service::new`] or deserialization,
/// and both reject band lists whose `upto_kg` limits do not strictly ascend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ServiceRecord")]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form duration text (e.g., "2-3 hours")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub popular: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    bands: Vec<WeightBand>,
}

/// Unvalidated service as it appears in catalog files
#[derive(Debug, Deserialize)]
struct ServiceRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    popular: bool,
    #[serde(default)]
    features: Vec<String>,
    bands: Vec<WeightBand>,
}

impl TryFrom<ServiceRecord> for Service {
    type Error = CatalogError;

    fn try_from(record: ServiceRecord) -> Result<Self, Self::Error> {
        let mut service = Service::new(record.id, record.title, record.bands)?;
        service.description = record.description;
        service.duration = record.duration;
        service.popular = record.popular;
        service.features = record.features;
        Ok(service)
    }
}

impl Service {
    /// Create a service, validating its band list
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        bands: Vec<WeightBand>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        validate_bands(&id, &bands)?;
        Ok(Self {
            id,
            title: title.into(),
            description: None,
            duration: None,
            popular: false,
            features: Vec::new(),
            bands,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Bands in ascending `upto_kg` order
    pub fn bands(&self) -> &[WeightBand] {
        &self.bands
    }

    /// Heaviest band, used as the catch-all
    pub fn last_band(&self) -> &WeightBand {
        // non-empty by construction
        &self.bands[self.bands.len() - 1]
    }

    /// Ceiling of the heaviest band
    pub fn max_upto_kg(&self) -> f64 {
        self.last_band().upto_kg
    }

    /// Cheapest and most expensive band prices
    pub fn price_range(&self) -> (u32, u32) {
        let first = self.bands[0].price;
        self.bands
            .iter()
            .fold((first, first), |(lo, hi), band| (lo.min(band.price), hi.max(band.price)))
    }
}

fn validate_bands(service_id: &str, bands: &[WeightBand]) -> Result<(), CatalogError> {
    if service_id.trim().is_empty() {
        return Err(CatalogError::EmptyServiceId);
    }
    if bands.is_empty() {
        return Err(CatalogError::EmptyBands {
            service_id: service_id.to_string(),
        });
    }

    let mut previous: Option<f64> = None;
    for (index, band) in bands.iter().enumerate() {
        if !band.upto_kg.is_finite() || band.upto_kg <= 0.0 {
            return Err(CatalogError::InvalidBandLimit {
                service_id: service_id.to_string(),
                index,
                upto_kg: band.upto_kg,
            });
        }
        if let Some(previous_kg) = previous {
            if band.upto_kg <= previous_kg {
                return Err(CatalogError::NonIncreasingBands {
                    service_id: service_id.to_string(),
                    index,
                    upto_kg: band.upto_kg,
                    previous_kg,
                });
            }
        }
        previous = Some(band.upto_kg);
    }

    Ok(())
}
