//! Built-in pricing data

pub mod builtin_catalog;
pub mod weight_options;

pub use builtin_catalog::builtin_catalog;
pub use weight_options::{DEFAULT_WEIGHT_KG, WEIGHT_OPTIONS};
