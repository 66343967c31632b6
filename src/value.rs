/// A dynamically shaped value the projection engine can walk.
///
/// The engine is closed over these shapes: anything a caller wants
/// projected has to be modelled with them first. `Null` doubles as
/// the "nothing survived filtering" sentinel that projection returns
/// for fully filtered aggregates.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value, and the empty projection result.
    Null,
    Bool(bool),
    /// Signed integers, widened to `i64`.
    Int(i64),
    /// Unsigned integers, widened to `u64`.
    UInt(u64),
    Float(f64),
    String(String),
    /// A possibly-nil reference. `Optional(None)` is the nil pointer.
    Optional(Option<Box<Value>>),
    /// Ordered fields of a struct-like value.
    Aggregate(Vec<Field>),
    Sequence(Vec<Value>),
    /// Ordered key/value pairs. Key order is preserved as given.
    Mapping(Vec<(String, Value)>),
    /// A shape the engine does not walk; the string names the kind
    /// for diagnostics. Projects to `Null`.
    Unsupported(String),
}

/// Structural class of a [`Value`], as seen by the projectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Primitive,
    Optional,
    Aggregate,
    Sequence,
    Mapping,
    Unsupported,
}

impl Value {
    /// Classifies this value by its runtime shape alone.
    ///
    /// `Null` counts as primitive: it is an opaque leaf the engine
    /// passes through unchanged.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::UInt(_)
            | Value::Float(_)
            | Value::String(_) => Kind::Primitive,
            Value::Optional(_) => Kind::Optional,
            Value::Aggregate(_) => Kind::Aggregate,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
            Value::Unsupported(_) => Kind::Unsupported,
        }
    }

    /// A reference carrying a payload.
    pub fn pointer(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }

    /// A reference carrying nothing.
    pub fn nil() -> Self {
        Value::Optional(None)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// One declared field of an [`Value::Aggregate`].
///
/// `tag` holds the raw metadata string exactly as declared, e.g.
/// `scope:"public,admin" json:"renamed"`. It is parsed on demand
/// during projection and carried through to the output unchanged, so
/// downstream encoders see the same annotations the source declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Whether the field was promoted from an embedded member type.
    /// Embedded fields are always included at their own level.
    pub embedded: bool,
    pub tag: String,
    pub value: Value,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        value: Value,
    ) -> Self {
        Field {
            name: name.into(),
            embedded: false,
            tag: tag.into(),
            value,
        }
    }

    /// A field promoted from an embedded member type.
    pub fn embedded(
        name: impl Into<String>,
        tag: impl Into<String>,
        value: Value,
    ) -> Self {
        Field {
            name: name.into(),
            embedded: true,
            tag: tag.into(),
            value,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
