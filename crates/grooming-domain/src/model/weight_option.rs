use serde::{Deserialize, Serialize};

/// Entry of the weight selector offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightOption {
    pub label: String,
    pub value_kg: f64,
}

impl WeightOption {
    pub fn new(label: impl Into<String>, value_kg: f64) -> Self {
        Self {
            label: label.into(),
            value_kg,
        }
    }
}

/// Find the option whose value matches `weight_kg`
pub fn find_option(options: &[WeightOption], weight_kg: f64) -> Option<&WeightOption> {
    options
        .iter()
        .find(|option| (option.value_kg - weight_kg).abs() < f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option() {
        let options = vec![
            WeightOption::new("Up to 10 kg", 10.0),
            WeightOption::new("11-25 kg", 25.0),
        ];
        assert_eq!(find_option(&options, 25.0).map(|o| o.label.as_str()), Some("11-25 kg"));
        assert!(find_option(&options, 12.5).is_none());
    }
}
