use serde::{Deserialize, Serialize};

/// Price tier keyed by an inclusive upper bound on pet weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBand {
    /// Display label (e.g., "Up to 10 kg", "All sizes")
    pub label: String,
    /// Inclusive upper weight limit in kilograms
    pub upto_kg: f64,
    /// Price in whole currency units
    pub price: u32,
}

impl WeightBand {
    pub fn new(label: impl Into<String>, upto_kg: f64, price: u32) -> Self {
        Self {
            label: label.into(),
            upto_kg,
            price,
        }
    }

    /// Whether a pet of `weight_kg` falls inside this band's ceiling
    pub fn covers(&self, weight_kg: f64) -> bool {
        weight_kg <= self.upto_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive() {
        let band = WeightBand::new("Up to 10 kg", 10.0, 45);
        assert!(band.covers(9.5));
        assert!(band.covers(10.0));
        assert!(!band.covers(10.01));
    }

    #[test]
    fn test_nan_is_never_covered() {
        let band = WeightBand::new("All sizes", 999.0, 15);
        assert!(!band.covers(f64::NAN));
    }
}
