//! Runtime type tags for option values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// `true` / `false`.
    Boolean,
    /// Whole numbers.
    Integer,
    /// Numbers with a fractional part.
    Float,
    /// Text values.
    String,
    /// Ordered sequences.
    List,
    /// Keyed mappings.
    Map,
}

impl ValueType {
    /// Type of a concrete value. `null` has no type; it means "unset".
    pub fn of(value: &Value) -> Option<ValueType> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(ValueType::Boolean),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(ValueType::Integer),
            Value::Number(_) => Some(ValueType::Float),
            Value::String(_) => Some(ValueType::String),
            Value::Array(_) => Some(ValueType::List),
            Value::Object(_) => Some(ValueType::Map),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::List => "list",
            ValueType::Map => "map",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of types an option may hold after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedTypes(Vec<ValueType>);

impl AcceptedTypes {
    /// Build a type set, dropping duplicates but keeping declaration order.
    pub fn new(types: impl IntoIterator<Item = ValueType>) -> Self {
        let mut set = Vec::new();
        for ty in types {
            if !set.contains(&ty) {
                set.push(ty);
            }
        }
        Self(set)
    }

    /// Returns true if `ty` is a member of the set.
    pub fn contains(&self, ty: ValueType) -> bool {
        self.0.contains(&ty)
    }

    /// Returns true if the value is unset or its type is a member of the set.
    pub fn admits(&self, value: &Value) -> bool {
        match ValueType::of(value) {
            None => true,
            Some(ty) => self.contains(ty),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.0.iter().copied()
    }
}

impl From<ValueType> for AcceptedTypes {
    fn from(ty: ValueType) -> Self {
        Self(vec![ty])
    }
}

impl<const N: usize> From<[ValueType; N]> for AcceptedTypes {
    fn from(types: [ValueType; N]) -> Self {
        Self::new(types)
    }
}

impl fmt::Display for AcceptedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|t| t.as_str()).collect();
        match names.len() {
            0 => f.write_str("nothing"),
            1 => f.write_str(names[0]),
            _ => write!(f, "one of {}", names.join(", ")),
        }
    }
}
