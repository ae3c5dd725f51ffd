//! Error types for grooming-pricer

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Catalog validation errors
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Service id must not be empty")]
    EmptyServiceId,

    #[error("Service '{service_id}' has no weight bands")]
    EmptyBands { service_id: String },

    #[error("Service '{service_id}' band {index} has invalid upper limit {upto_kg} kg")]
    InvalidBandLimit {
        service_id: String,
        index: usize,
        upto_kg: f64,
    },

    #[error("Service '{service_id}' band {index} does not increase ({upto_kg} kg after {previous_kg} kg)")]
    NonIncreasingBands {
        service_id: String,
        index: usize,
        upto_kg: f64,
        previous_kg: f64,
    },

    #[error("Duplicate service id: {0}")]
    DuplicateServiceId(String),
}

/// Pricing errors raised in strict mode
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Unknown service id: {0}")]
    UnknownServiceId(String),

    #[error("Weight {weight_kg} kg exceeds the last band of '{service_id}' ({max_kg} kg)")]
    WeightOutOfRange {
        service_id: String,
        weight_kg: f64,
        max_kg: f64,
    },

    #[error("Invalid pet weight: {0} kg")]
    InvalidWeight(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
