//! Weight choices offered by the weight selector

use grooming_domain::model::WeightOption;
use std::sync::LazyLock;

/// Weight preselected when none is given
pub const DEFAULT_WEIGHT_KG: f64 = 10.0;

/// Standard weight options
pub static WEIGHT_OPTIONS: LazyLock<Vec<WeightOption>> = LazyLock::new(|| {
    vec![
        WeightOption::new("Up to 10 kg", 10.0),
        WeightOption::new("11–25 kg", 25.0),
        WeightOption::new("26–40 kg", 40.0),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use grooming_domain::model::weight_option::find_option;

    #[test]
    fn test_default_weight_is_first_option() {
        assert_eq!(WEIGHT_OPTIONS.len(), 3);
        let option = find_option(&WEIGHT_OPTIONS, DEFAULT_WEIGHT_KG).unwrap();
        assert_eq!(option.label, "Up to 10 kg");
    }

    #[test]
    fn test_option_labels_match_catalog_bands() {
        let labels: Vec<&str> = WEIGHT_OPTIONS.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Up to 10 kg", "11–25 kg", "26–40 kg"]);
    }
}
