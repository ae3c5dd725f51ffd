//! Translations document used as an external source of booking strings
//!
//! Keys are dotted paths into nested JSON objects, so `booking.timeSlots`
//! reads `{"booking": {"timeSlots": [...]}}`.

use grooming_types::{ConfigError, Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Key holding the appointment time slots
pub const TIME_SLOTS_KEY: &str = "booking.timeSlots";

#[derive(Debug, Clone, Default)]
pub struct TranslationSource {
    root: Value,
}

impl TranslationSource {
    /// Load a translations JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Translations file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let source = Self::load_from_str(&content)?;
        tracing::debug!(path = %path.display(), "translations loaded");
        Ok(source)
    }

    /// Parse translations from JSON text
    pub fn load_from_str(json_content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse translations JSON: {}",
                e
            )))
        })?;
        Ok(Self { root })
    }

    /// Look up a dotted key
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// Raw value behind [`TIME_SLOTS_KEY`]
    pub fn time_slots(&self) -> Option<&Value> {
        self.lookup(TIME_SLOTS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_lookup_nested_key() {
        let source = TranslationSource::load_from_str(
            r#"{"booking": {"success": "Booked!", "timeSlots": ["10:00", "11:00"]}}"#,
        )
        .unwrap();
        assert_eq!(source.lookup("booking.success"), Some(&json!("Booked!")));
        assert_eq!(source.time_slots(), Some(&json!(["10:00", "11:00"])));
    }

    #[test]
    fn test_lookup_missing_key() {
        let source = TranslationSource::load_from_str(r#"{"booking": {"success": "Booked!"}}"#).unwrap();
        assert!(source.time_slots().is_none());
        assert!(source.lookup("booking.success.deeper").is_none());
        assert!(TranslationSource::default().time_slots().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en.json");
        std::fs::write(&path, r#"{"booking": {"timeSlots": []}}"#).unwrap();

        let source = TranslationSource::load_from_file(&path).unwrap();
        assert_eq!(source.time_slots(), Some(&json!([])));
    }

    #[test]
    fn test_invalid_json() {
        let result = TranslationSource::load_from_str("{booking");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }
}
