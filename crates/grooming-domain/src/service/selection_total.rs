//! Selection totals and quotes

use std::collections::HashSet;

use grooming_types::{PricingError, PricingMode};

use super::price_resolver::{resolve_band, resolve_band_strict, validate_weight};
use crate::model::{Catalog, Quote, QuoteLine, Selection};

/// Sum of the resolved band prices of the selected services
///
/// Ids missing from the catalog contribute nothing and repeated ids are
/// counted once.
pub fn selection_total<I, S>(catalog: &Catalog, selected_ids: I, weight_kg: f64) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    selected_ids
        .into_iter()
        .filter_map(|id| {
            let id = id.as_ref();
            if !seen.insert(id.to_string()) {
                return None;
            }
            catalog.get(id)
        })
        .map(|service| u64::from(resolve_band(service, weight_kg).price))
        .sum()
}

/// Price a selection line by line
///
/// In lenient mode unknown ids land in [`Quote::skipped`] and oversized pets
/// take the last band, so `total` equals [`selection_total`]. Strict mode
/// returns the first problem as an error.
pub fn quote_selection(
    catalog: &Catalog,
    selection: &Selection,
    mode: PricingMode,
) -> Result<Quote, PricingError> {
    let weight_kg = selection.weight_kg;
    if mode == PricingMode::Strict {
        validate_weight(weight_kg)?;
    }

    let mut lines = Vec::with_capacity(selection.len());
    let mut skipped = Vec::new();

    for id in selection.service_ids() {
        let Some(service) = catalog.get(id) else {
            if mode == PricingMode::Strict {
                return Err(PricingError::UnknownServiceId(id.clone()));
            }
            skipped.push(id.clone());
            continue;
        };

        let band = match mode {
            PricingMode::Lenient => resolve_band(service, weight_kg),
            PricingMode::Strict => resolve_band_strict(service, weight_kg)?,
        };

        lines.push(QuoteLine {
            service_id: service.id.clone(),
            title: service.title.clone(),
            band_label: band.label.clone(),
            price: band.price,
        });
    }

    let total = lines.iter().map(|line| u64::from(line.price)).sum();

    Ok(Quote {
        weight_kg,
        lines,
        skipped,
        total,
    })
}
