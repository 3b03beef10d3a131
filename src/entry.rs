//! Food entry - the only record clcnt stores

use serde::{Deserialize, Serialize};

/// A single food entry.
///
/// Entries are immutable once stored: there is no update or delete path.
/// Serialized with PascalCase keys (`Timestamp`, `Food`, `Calories`), the
/// wire format existing API clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    /// Unix epoch seconds of when the food was consumed
    pub timestamp: i64,
    /// Short label, e.g. `Breakfast`
    pub food: String,
    /// Calorie count; sign and magnitude are not validated
    pub calories: i64,
}

impl Entry {
    pub fn new(timestamp: i64, food: impl Into<String>, calories: i64) -> Self {
        Self {
            timestamp,
            food: food.into(),
            calories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = Entry::new(1_700_000_000, "Lunch", 650);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["Timestamp"], 1_700_000_000i64);
        assert_eq!(json["Food"], "Lunch");
        assert_eq!(json["Calories"], 650);
        assert!(json.get("food").is_none());
    }

    #[test]
    fn test_entry_parses_pascal_case() {
        let entry: Entry =
            serde_json::from_str(r#"{"Timestamp":1,"Food":"Tea","Calories":5}"#).unwrap();
        assert_eq!(entry, Entry::new(1, "Tea", 5));
    }
}
