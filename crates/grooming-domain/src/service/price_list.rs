//! Catalog rendered at a single pet weight

use serde::{Deserialize, Serialize};

use super::price_resolver::resolve_band;
use crate::model::{Catalog, WeightBand};

/// One row of the services price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListEntry {
    pub service_id: String,
    pub title: String,
    pub duration: Option<String>,
    pub popular: bool,
    /// Band that applies at the requested weight
    pub band: WeightBand,
    /// Full band table for the service
    pub bands: Vec<WeightBand>,
}

pub fn price_list(catalog: &Catalog, weight_kg: f64) -> Vec<PriceListEntry> {
    catalog
        .iter()
        .map(|service| PriceListEntry {
            service_id: service.id.clone(),
            title: service.title.clone(),
            duration: service.duration.clone(),
            popular: service.popular,
            band: resolve_band(service, weight_kg).clone(),
            bands: service.bands().to_vec(),
        })
        .collect()
}

/// Render an amount with a currency symbol prefix (e.g., "€45")
pub fn format_price(amount: u64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, amount)
}
