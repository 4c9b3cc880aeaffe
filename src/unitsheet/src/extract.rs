//! Export row extraction.
//!
//! Each active unit becomes one [`ExportRow`]. Missing fields fall back to
//! fixed defaults: tier `1`, cost `0`, empty description, and `N/A` health.

use serde::Serialize;
use serde_yaml::Value;

use crate::document::{value_text, Document, UnitRecord};

pub const DEFAULT_TIER: i64 = 1;
pub const DEFAULT_COST: i64 = 0;

/// Health column value when no `[current, max]` pair is available
pub const HEALTH_UNAVAILABLE: &str = "N/A";

/// Column names, in output order
pub const COLUMNS: [&str; 5] = ["name", "tier", "health", "cost", "description"];

/// One output line, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub tier: String,
    pub health: String,
    pub cost: String,
    pub description: String,
}

/// Build the export row for one unit
pub fn extract(name: &str, record: &UnitRecord) -> ExportRow {
    ExportRow {
        name: name.to_string(),
        tier: record
            .tier
            .as_ref()
            .map_or_else(|| DEFAULT_TIER.to_string(), value_text),
        health: health_text(record.components.health.as_ref()),
        cost: record
            .components
            .cost
            .as_ref()
            .map_or_else(|| DEFAULT_COST.to_string(), value_text),
        description: record
            .description
            .as_ref()
            .map(value_text)
            .unwrap_or_default(),
    }
}

/// Rows for every active unit, in document order
pub fn extract_all(document: &Document) -> Vec<ExportRow> {
    document
        .active()
        .map(|(name, record)| extract(name, record))
        .collect()
}

/// `current/max` for a two-element sequence, `N/A` for anything else.
pub fn health_text(health: Option<&Value>) -> String {
    match health.and_then(Value::as_sequence).map(Vec::as_slice) {
        Some([current, max]) => format!("{}/{}", value_text(current), value_text(max)),
        _ => HEALTH_UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Components;

    fn seq(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_all_fields_present() {
        let record = UnitRecord {
            tier: Some(Value::from(2)),
            components: Components {
                health: Some(seq("[30, 30]")),
                cost: Some(Value::from(15)),
            },
            description: Some(Value::from("A fast hunter")),
        };

        let row = extract("Wolf", &record);
        assert_eq!(
            row,
            ExportRow {
                name: "Wolf".into(),
                tier: "2".into(),
                health: "30/30".into(),
                cost: "15".into(),
                description: "A fast hunter".into(),
            }
        );
    }

    #[test]
    fn test_defaults() {
        let row = extract("Slime", &UnitRecord::default());
        assert_eq!(row.tier, "1");
        assert_eq!(row.health, "N/A");
        assert_eq!(row.cost, "0");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_health_pair() {
        assert_eq!(health_text(Some(&seq("[7, 20]"))), "7/20");
        assert_eq!(health_text(Some(&seq("[2.5, 10]"))), "2.5/10");
    }

    #[test]
    fn test_health_unavailable() {
        assert_eq!(health_text(None), "N/A");
        assert_eq!(health_text(Some(&seq("[5]"))), "N/A");
        assert_eq!(health_text(Some(&seq("[1, 2, 3]"))), "N/A");
        assert_eq!(health_text(Some(&seq("[]"))), "N/A");
        assert_eq!(health_text(Some(&Value::from(20))), "N/A");
        assert_eq!(health_text(Some(&Value::from("7/20"))), "N/A");
    }

    #[test]
    fn test_values_not_coerced() {
        let record = UnitRecord {
            tier: Some(Value::from("elite")),
            components: Components {
                health: None,
                cost: Some(Value::from(2.5)),
            },
            description: Some(Value::Null),
        };

        let row = extract("Odd", &record);
        assert_eq!(row.tier, "elite");
        assert_eq!(row.cost, "2.5");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_extract_all_skips_disabled() {
        let map: serde_yaml::Mapping =
            serde_yaml::from_str("A: {}\nB: null\nC: { tier: 3 }\nD: null\n").unwrap();
        let doc = Document::from_mapping(map);

        let rows = extract_all(&doc);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(rows[1].tier, "3");
    }
}
