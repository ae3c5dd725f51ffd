//! Quote Service - prices selections against one loaded catalog
//!
//! The catalog is loaded once and never mutated, so a service can answer any
//! number of quotes.

use grooming_domain::model::{Catalog, Quote, Selection};
use grooming_domain::service::{
    price_list, quote_selection, selection_total, validate_weight, PriceListEntry,
};
use grooming_types::{PricingMode, Result};

use crate::config::Config;
use crate::repository::open_catalog;

#[derive(Debug, Clone)]
pub struct QuoteService {
    catalog: Catalog,
    mode: PricingMode,
}

impl QuoteService {
    pub fn new(catalog: Catalog, mode: PricingMode) -> Self {
        Self { catalog, mode }
    }

    /// Build from the configured catalog source and pricing mode
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = open_catalog(config)?;
        Ok(Self::new(catalog, config.pricing_mode))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Price a selection
    pub fn quote(&self, selection: &Selection) -> Result<Quote> {
        match quote_selection(&self.catalog, selection, self.mode) {
            Ok(quote) => {
                if !quote.skipped.is_empty() {
                    tracing::warn!(skipped = ?quote.skipped, "ignoring unknown service ids");
                }
                tracing::debug!(
                    weight_kg = quote.weight_kg,
                    services = quote.lines.len(),
                    total = quote.total,
                    "quote computed"
                );
                Ok(quote)
            }
            Err(e) => {
                tracing::warn!(mode = %self.mode, error = %e, "quote rejected");
                Err(e.into())
            }
        }
    }

    /// Lenient total, regardless of mode
    pub fn total<I, S>(&self, selected_ids: I, weight_kg: f64) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selection_total(&self.catalog, selected_ids, weight_kg)
    }

    /// Price list at a weight
    ///
    /// Strict mode rejects invalid weights; bands still fall back to the last
    /// one so every service is listed.
    pub fn price_list(&self, weight_kg: f64) -> Result<Vec<PriceListEntry>> {
        if self.mode == PricingMode::Strict {
            validate_weight(weight_kg)?;
        }
        Ok(price_list(&self.catalog, weight_kg))
    }
}
