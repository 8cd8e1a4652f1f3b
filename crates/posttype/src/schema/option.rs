//! A single option's schema entry.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::value::{AcceptedTypes, ValueType};

type SanitizeFn = dyn Fn(&Value) -> Option<Value> + Send + Sync;

/// A normalization function applied to an accepted option value.
///
/// Returning `None` leaves the value unchanged; a sanitizer can never turn a
/// set value into an unset one.
#[derive(Clone)]
pub struct Sanitizer(Arc<SanitizeFn>);

impl Sanitizer {
    pub fn new(f: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the sanitizer, falling back to the input when it yields nothing.
    pub fn apply(&self, value: Value) -> Value {
        match (self.0)(&value) {
            Some(sanitized) => sanitized,
            None => value,
        }
    }

    /// Chain another sanitizer after this one.
    pub fn then(self, next: Sanitizer) -> Sanitizer {
        Sanitizer::new(move |value| Some(next.apply(self.apply(value.clone()))))
    }
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sanitizer(..)")
    }
}

/// Schema entry for one option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Value used when the caller supplies nothing. `None` means unset.
    pub default: Option<Value>,
    /// Every type the option may hold after resolution.
    pub accepted: AcceptedTypes,
    sanitizer: Option<Sanitizer>,
    typed_sanitizers: Vec<(ValueType, Sanitizer)>,
}

impl OptionSpec {
    /// Create an entry with no default and no sanitizer.
    pub fn new(accepted: impl Into<AcceptedTypes>) -> Self {
        Self {
            default: None,
            accepted: accepted.into(),
            sanitizer: None,
            typed_sanitizers: Vec::new(),
        }
    }

    /// Set the default value. A JSON `null` default is the same as no default.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = match default.into() {
            Value::Null => None,
            value => Some(value),
        };
        self
    }

    /// Sanitize every accepted value, whatever its type.
    pub fn sanitize(mut self, f: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static) -> Self {
        self.sanitizer = Some(Sanitizer::new(f));
        self
    }

    /// Sanitize with a prebuilt (possibly chained) sanitizer.
    pub fn sanitize_with(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = Some(sanitizer);
        self
    }

    /// Sanitize only values whose runtime type is `ty`.
    pub fn sanitize_when(
        mut self,
        ty: ValueType,
        f: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.typed_sanitizers.retain(|(existing, _)| *existing != ty);
        self.typed_sanitizers.push((ty, Sanitizer::new(f)));
        self
    }

    /// The sanitizer that applies to a value of type `ty`, if any.
    ///
    /// Per-type sanitizers take precedence over the general one.
    pub fn sanitizer_for(&self, ty: ValueType) -> Option<&Sanitizer> {
        self.typed_sanitizers
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, s)| s)
            .or(self.sanitizer.as_ref())
    }

    /// Apply the matching sanitizer to an already type-checked value.
    pub fn apply(&self, value: Value) -> Value {
        match ValueType::of(&value).and_then(|ty| self.sanitizer_for(ty)) {
            Some(sanitizer) => sanitizer.apply(value),
            None => value,
        }
    }
}
