//! Domain model types

pub mod catalog;
pub mod quote;
pub mod selection;
pub mod service;
pub mod weight_band;
pub mod weight_option;

pub use catalog::Catalog;
pub use quote::{Quote, QuoteLine};
pub use selection::Selection;
pub use service::Service;
pub use weight_band::WeightBand;
pub use weight_option::WeightOption;
