//! Custom YAML tag handling.
//!
//! Unit files annotate some nodes with behaviour tags such as `!Basic` or
//! `!FoodProducer`. None of the exported columns depend on them, so a tagged
//! node is collapsed into a plain string holding the tag's name and its
//! content is dropped.

use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};

/// Tags recognized in unit definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitTag {
    Basic,
    FoodProducer,
}

impl UnitTag {
    pub const ALL: &'static [UnitTag] = &[UnitTag::Basic, UnitTag::FoodProducer];

    /// Tag name without the leading `!`
    pub fn name(self) -> &'static str {
        match self {
            UnitTag::Basic => "Basic",
            UnitTag::FoodProducer => "FoodProducer",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// How tags outside [`UnitTag`] are treated while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Unknown tags fail the load.
    #[default]
    Strict,
    /// Unknown tags collapse to their name like the known ones.
    Lenient,
}

/// Strip the leading `!` from a tag.
fn tag_name(tag: &Tag) -> String {
    let raw = tag.to_string();
    match raw.strip_prefix('!') {
        Some(name) => name.to_string(),
        None => raw,
    }
}

fn collapse(tagged: TaggedValue, policy: TagPolicy) -> Result<Value, String> {
    let name = tag_name(&tagged.tag);
    match UnitTag::from_name(&name) {
        Some(known) => Ok(Value::String(known.name().to_string())),
        None if policy == TagPolicy::Lenient => {
            tracing::debug!(tag = %name, "collapsing unknown tag");
            Ok(Value::String(name))
        }
        None => Err(format!(
            "unknown tag !{} (expected one of: {})",
            name,
            UnitTag::ALL
                .iter()
                .map(|t| format!("!{}", t.name()))
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// Replace every tagged node in `value` with its tag name.
///
/// Keys are resolved as well as values, so a tagged key becomes a string key.
pub fn resolve_tags(value: Value, policy: TagPolicy) -> Result<Value, String> {
    match value {
        Value::Tagged(tagged) => collapse(*tagged, policy),
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|v| resolve_tags(v, policy))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        Value::Mapping(map) => {
            let mut resolved = Mapping::with_capacity(map.len());
            for (k, v) in map {
                resolved.insert(resolve_tags(k, policy)?, resolve_tags(v, policy)?);
            }
            Ok(Value::Mapping(resolved))
        }
        other => Ok(other),
    }
}
