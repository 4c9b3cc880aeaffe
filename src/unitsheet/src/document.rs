//! In-memory model of a unit definition file.

use serde_yaml::{Mapping, Value};

/// A parsed unit file: unit entries in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub units: Vec<UnitEntry>,
}

/// One top-level entry. `record` is `None` for a unit set to `null`
/// (commented out in the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry {
    pub name: String,
    pub record: Option<UnitRecord>,
}

/// The recognized fields of a unit definition.
///
/// Values are kept as loaded; defaults are applied by the extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitRecord {
    pub tier: Option<Value>,
    pub components: Components,
    pub description: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub health: Option<Value>,
    pub cost: Option<Value>,
}

impl Document {
    /// Build a document from the root mapping of a unit file
    pub fn from_mapping(map: Mapping) -> Self {
        let units = map
            .into_iter()
            .map(|(key, value)| {
                let name = value_text(&key);
                let record = match value {
                    Value::Null => None,
                    other => Some(UnitRecord::from_value(&name, other)),
                };
                UnitEntry { name, record }
            })
            .collect();
        Document { units }
    }

    /// Entries that are not disabled
    pub fn active(&self) -> impl Iterator<Item = (&str, &UnitRecord)> {
        self.units
            .iter()
            .filter_map(|u| u.record.as_ref().map(|r| (u.name.as_str(), r)))
    }

    pub fn disabled_count(&self) -> usize {
        self.units.iter().filter(|u| u.record.is_none()).count()
    }
}

impl UnitRecord {
    /// Pick the recognized fields out of a unit's value.
    ///
    /// A value that is not a mapping has no recognized fields.
    pub fn from_value(name: &str, value: Value) -> Self {
        let mut map = match value {
            Value::Mapping(map) => map,
            other => {
                tracing::warn!(
                    unit = name,
                    kind = kind_name(&other),
                    "unit is not a mapping, using defaults"
                );
                return UnitRecord::default();
            }
        };

        let components = match map.remove("components") {
            None | Some(Value::Null) => Components::default(),
            Some(Value::Mapping(mut comp)) => Components {
                health: comp.remove("health"),
                cost: comp.remove("cost"),
            },
            Some(other) => {
                tracing::warn!(
                    unit = name,
                    kind = kind_name(&other),
                    "components is not a mapping, ignoring"
                );
                Components::default()
            }
        };

        UnitRecord {
            tier: map.remove("tier"),
            components,
            description: map.remove("description"),
        }
    }
}

/// Render a YAML value the way it reads in the source file.
///
/// Scalars are written bare (`null` as empty), collections as inline YAML.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(inline_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", inline_text(k), inline_text(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, inline_text(&tagged.value)),
    }
}

fn inline_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => value_text(other),
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_preserves_order_and_nulls() {
        let doc = Document::from_mapping(mapping("Zebra: {}\nApe: null\nMole:\n  tier: 3\n"));
        let names: Vec<_> = doc.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Ape", "Mole"]);
        assert!(doc.units[1].record.is_none());
        assert_eq!(doc.disabled_count(), 1);

        let active: Vec<_> = doc.active().map(|(n, _)| n).collect();
        assert_eq!(active, vec!["Zebra", "Mole"]);
    }

    #[test]
    fn test_recognized_fields() {
        let doc = Document::from_mapping(mapping(
            "Wolf:\n  tier: 2\n  sprite: { atlas: units, index: 4 }\n  components: { health: [30, 30], cost: 15, speed: 2 }\n  description: A fast hunter\n",
        ));
        let record = doc.units[0].record.as_ref().unwrap();
        assert_eq!(record.tier, Some(Value::from(2)));
        assert_eq!(record.components.cost, Some(Value::from(15)));
        assert!(record.components.health.as_ref().unwrap().is_sequence());
        assert_eq!(
            record.description.as_ref().and_then(|v| v.as_str()),
            Some("A fast hunter")
        );
    }

    #[test]
    fn test_non_mapping_unit_uses_defaults() {
        let record = UnitRecord::from_value("Rock", Value::from("Basic"));
        assert_eq!(record, UnitRecord::default());
    }

    #[test]
    fn test_non_mapping_components_ignored() {
        let doc = Document::from_mapping(mapping("Slime:\n  components: 12\n  tier: 4\n"));
        let record = doc.units[0].record.as_ref().unwrap();
        assert_eq!(record.components, Components::default());
        assert_eq!(record.tier, Some(Value::from(4)));
    }

    #[test]
    fn test_non_string_keys() {
        let doc = Document::from_mapping(mapping("1: {}\ntrue: {}\n"));
        let names: Vec<_> = doc.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["1", "true"]);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&Value::from(7)), "7");
        assert_eq!(value_text(&Value::from(2.5)), "2.5");
        assert_eq!(value_text(&Value::from(false)), "false");
        assert_eq!(value_text(&Value::from("blob")), "blob");

        let seq: Value = serde_yaml::from_str("[1, ~, a]").unwrap();
        assert_eq!(value_text(&seq), "[1, null, a]");

        let map: Value = serde_yaml::from_str("{a: 1, b: [2]}").unwrap();
        assert_eq!(value_text(&map), "{a: 1, b: [2]}");
    }
}
