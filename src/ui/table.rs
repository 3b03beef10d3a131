use chrono::{Local, TimeZone};
use tabled::{settings::Style, Table, Tabled};

use crate::entry::Entry;

#[derive(Tabled)]
pub struct EntryRow {
    #[tabled(rename = "Time")]
    pub time: String,
    #[tabled(rename = "Food")]
    pub food: String,
    #[tabled(rename = "Calories")]
    pub calories: i64,
}

impl From<&Entry> for EntryRow {
    fn from(entry: &Entry) -> Self {
        Self {
            time: format_timestamp(entry.timestamp),
            food: entry.food.clone(),
            calories: entry.calories,
        }
    }
}

/// Render a Unix timestamp in local time, or the raw number if out of range
pub fn format_timestamp(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

pub fn entries_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert!(entries_table(&[]).is_empty());
    }

    #[test]
    fn test_table_lists_food() {
        let table = entries_table(&[Entry::new(0, "Porridge", 350)]);

        assert!(table.contains("Food"));
        assert!(table.contains("Porridge"));
        assert!(table.contains("350"));
    }

    #[test]
    fn test_format_out_of_range_timestamp() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
