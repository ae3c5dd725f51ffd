use serde::{Deserialize, Serialize};

/// One priced service in a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub service_id: String,
    pub title: String,
    /// Label of the band the weight resolved to
    pub band_label: String,
    pub price: u32,
}

/// Priced selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub weight_kg: f64,
    pub lines: Vec<QuoteLine>,
    /// Selected ids that are not in the catalog (lenient mode only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub total: u64,
}
