//! Verified configuration engine.
//!
//! Resolves caller overrides against a [`ConfigSchema`] into an immutable
//! [`ConfigRecord`] holding a value (or an explicit "unset") for every
//! declared option.

use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{trace, warn};

use crate::error::{PostTypeError, Result};
use crate::schema::ConfigSchema;
use crate::value::ValueType;

/// Caller-supplied option overrides.
pub type Overrides = serde_json::Map<String, Value>;

/// Fully resolved, immutable option values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    values: IndexMap<String, Option<Value>>,
}

impl ConfigRecord {
    /// Look up a declared option. `None` means the name is not declared;
    /// `Some(None)` means the option resolved to unset.
    pub fn get(&self, name: &str) -> Option<Option<&Value>> {
        self.values.get(name).map(Option::as_ref)
    }

    /// String value of an option, if it resolved to a string.
    pub fn string(&self, name: &str) -> Option<&str> {
        self[name].as_ref().and_then(Value::as_str)
    }

    /// Boolean value of an option, if it resolved to a boolean.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self[name].as_ref().and_then(Value::as_bool)
    }

    /// List value of an option. Unset or non-list options read as empty.
    pub fn list(&self, name: &str) -> &[Value] {
        match &self[name] {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Iterate options in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<&str> for ConfigRecord {
    type Output = Option<Value>;

    /// Panics if `name` is not declared in the schema the record was built from.
    fn index(&self, name: &str) -> &Self::Output {
        match self.values.get(name) {
            Some(value) => value,
            None => panic!("option '{name}' is not declared in the configuration schema"),
        }
    }
}

/// Resolve overrides against a schema.
///
/// Every declared option ends up in the record: the override if one was given,
/// otherwise the default, otherwise unset. A JSON `null` override means unset
/// and is accepted for any option. Overrides for undeclared options are ignored.
pub fn resolve(schema: &ConfigSchema, overrides: &Overrides) -> Result<ConfigRecord> {
    for name in overrides.keys() {
        if !schema.contains(name) {
            warn!(option = %name, "ignoring override for undeclared option");
        }
    }

    let mut values = IndexMap::with_capacity(schema.len());

    for (name, spec) in schema.iter() {
        let candidate = match overrides.get(name) {
            Some(Value::Null) => None,
            Some(value) => {
                if let Some(found) = ValueType::of(value) {
                    if !spec.accepted.contains(found) {
                        return Err(PostTypeError::SchemaViolation {
                            option: name.to_string(),
                            expected: spec.accepted.clone(),
                            found,
                        });
                    }
                }
                Some(value.clone())
            }
            None => spec.default.clone(),
        };

        let resolved = candidate.map(|value| spec.apply(value));
        trace!(option = %name, value = ?resolved, "resolved option");
        values.insert(name.to_string(), resolved);
    }

    Ok(ConfigRecord { values })
}
