//! Domain services

pub mod price_list;
pub mod price_resolver;
pub mod selection_total;
pub mod time_slots;

pub use price_list::{format_price, price_list, PriceListEntry};
pub use price_resolver::{resolve_band, resolve_band_strict, validate_weight};
pub use selection_total::{quote_selection, selection_total};
pub use time_slots::{default_time_slots, time_slots_or_default};
