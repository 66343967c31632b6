use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::tag;
use crate::value::{Field, Value};

/// Metadata key consulted for encoder-facing field names.
const JSON_KEY: &str = "json";

impl Field {
    /// The name an encoder should use for this field: the name of a
    /// `json` tag entry when one declares a usable one, else the
    /// declared field name.
    pub fn wire_name(&self) -> String {
        if let Ok(tags) = tag::parse(&self.tag) {
            if let Some(entry) = tag::get(&tags, JSON_KEY) {
                if !entry.name.is_empty() && entry.name != "-" {
                    return entry.name.clone();
                }
            }
        }
        self.name.clone()
    }
}

/// Custom implementation of [`Serialize`] for [`Value`]
///
/// Projection produces a value, not bytes; this impl is the encoder
/// collaborator that turns a projected value into serialized data.
/// Aggregates become maps keyed by [`Field::wire_name`], and absent
/// values of every flavor (empty results, nil references,
/// unsupported shapes) become null.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::UInt(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Optional(None) => serializer.serialize_none(),
            Value::Optional(Some(inner)) => inner.serialize(serializer),
            Value::Sequence(items) => {
                let mut seq =
                    serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Aggregate(fields) => {
                let mut map =
                    serializer.serialize_map(Some(fields.len()))?;
                for field in fields {
                    map.serialize_entry(&field.wire_name(), &field.value)?;
                }
                map.end()
            }
            Value::Mapping(pairs) => {
                let mut map =
                    serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Unsupported(_) => serializer.serialize_unit(),
        }
    }
}
