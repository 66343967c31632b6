use crate::tag;
use crate::value::{Field, Kind, Value};

/// Metadata key reserved for the engine's own scope annotations.
pub const SCOPE_KEY: &str = "scope";

/// Projects `value` down to the fields visible under `scope`,
/// recursing through aggregates, references, sequences and mappings.
///
/// Returns [`Value::Null`] when nothing survives filtering. The call
/// itself never fails: malformed field metadata excludes the field,
/// and unrecognized shapes are reported and treated as absent.
pub fn project(value: &Value, scope: &str) -> Value {
    match value {
        Value::Optional(inner) => project_optional(inner, scope),
        Value::Aggregate(fields) => project_aggregate(fields, scope),
        Value::Sequence(items) => project_sequence(items, scope),
        Value::Mapping(pairs) => project_mapping(pairs, scope),
        Value::Unsupported(kind) => {
            log::warn!("Skipping value of unsupported kind: {kind}");
            Value::Null
        }
        primitive => primitive.clone(),
    }
}

/// Decides whether one field belongs to `scope`.
///
/// Language-level visibility comes first: a field whose name does not
/// start with an uppercase letter is never included, embedded or not.
/// Embedded fields are then included without consulting metadata.
/// Everything else needs a `scope` tag entry listing the requested
/// scope among its values.
fn include_field(field: &Field, scope: &str) -> bool {
    if !field
        .name
        .chars()
        .next()
        .map_or(false, char::is_uppercase)
    {
        return false;
    }
    if field.embedded {
        return true;
    }
    let tags = match tag::parse(&field.tag) {
        Ok(tags) => tags,
        Err(err) => {
            log::debug!("Dropping field {}: {}", field.name, err);
            return false;
        }
    };
    tag::get(&tags, SCOPE_KEY)
        .map_or(false, |entry| entry.matches(scope))
}

fn project_aggregate(fields: &[Field], scope: &str) -> Value {
    let mut included = Vec::new();
    for field in fields {
        if !include_field(field, scope) {
            continue;
        }
        // Unlike sequence elements, an included field survives even
        // when its own projection comes back empty.
        included.push(Field {
            name: field.name.clone(),
            embedded: field.embedded,
            tag: field.tag.clone(),
            value: project(&field.value, scope),
        });
    }
    if included.is_empty() {
        Value::Null
    } else {
        Value::Aggregate(included)
    }
}

/// Only references to aggregates are projected; references to any
/// other shape pass through untouched. A nil reference stays nil,
/// and an aggregate payload filtering away entirely leaves a
/// reference to nothing rather than collapsing to absent.
fn project_optional(inner: &Option<Box<Value>>, scope: &str) -> Value {
    match inner {
        None => Value::Optional(None),
        Some(payload) if payload.kind() == Kind::Aggregate => {
            Value::pointer(project(payload, scope))
        }
        Some(payload) => Value::Optional(Some(payload.clone())),
    }
}

fn project_sequence(items: &[Value], scope: &str) -> Value {
    let out: Vec<Value> = items
        .iter()
        .map(|item| project(item, scope))
        .filter(|item| !item.is_null())
        .collect();
    Value::Sequence(out)
}

fn project_mapping(pairs: &[(String, Value)], scope: &str) -> Value {
    let out: Vec<(String, Value)> = pairs
        .iter()
        .filter_map(|(key, value)| {
            let projected = project(value, scope);
            if projected.is_null() {
                None
            } else {
                Some((key.clone(), projected))
            }
        })
        .collect();
    Value::Mapping(out)
}
