//! The full option surface for one configuration instance.

use indexmap::IndexMap;

use super::option::OptionSpec;
use crate::error::{PostTypeError, Result};
use crate::value::ValueType;

/// Mapping from option name to its schema entry, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    options: IndexMap<String, OptionSpec>,
}

impl ConfigSchema {
    /// Start declaring a schema.
    pub fn builder() -> ConfigSchemaBuilder {
        ConfigSchemaBuilder::default()
    }

    /// Get the entry for an option.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get all option names.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Builder that checks schema-authoring mistakes before a schema is used.
#[derive(Debug, Default)]
pub struct ConfigSchemaBuilder {
    options: IndexMap<String, OptionSpec>,
}

impl ConfigSchemaBuilder {
    /// Declare an option. Redeclaring a name replaces the earlier entry in place.
    pub fn option(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.options.insert(name.into(), spec);
        self
    }

    /// Validate every entry and produce the schema.
    pub fn build(self) -> Result<ConfigSchema> {
        for (name, spec) in &self.options {
            if spec.accepted.is_empty() {
                return Err(PostTypeError::InvalidSchema {
                    option: name.clone(),
                    reason: "no accepted types declared".to_string(),
                });
            }

            if let Some(default) = &spec.default {
                if !spec.accepted.admits(default) {
                    let found = ValueType::of(default)
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "null".to_string());
                    return Err(PostTypeError::InvalidSchema {
                        option: name.clone(),
                        reason: format!("default is {found}, expected {}", spec.accepted),
                    });
                }
            }
        }

        Ok(ConfigSchema {
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AcceptedTypes;

    #[test]
    fn test_build_keeps_declaration_order() {
        let schema = ConfigSchema::builder()
            .option("b", OptionSpec::new(ValueType::Boolean).with_default(true))
            .option("a", OptionSpec::new(ValueType::String))
            .build()
            .unwrap();

        assert_eq!(schema.option_names(), vec!["b", "a"]);
        assert_eq!(schema.len(), 2);
        assert!(schema.contains("a"));
        assert!(!schema.contains("c"));
    }

    #[test]
    fn test_rejects_mistyped_default() {
        let err = ConfigSchema::builder()
            .option("public", OptionSpec::new(ValueType::Boolean).with_default("yes"))
            .build()
            .unwrap_err();

        assert!(matches!(err, PostTypeError::InvalidSchema { ref option, .. } if option == "public"));
        assert!(err.to_string().contains("default is string"));
    }

    #[test]
    fn test_rejects_empty_type_set() {
        let err = ConfigSchema::builder()
            .option("x", OptionSpec::new(AcceptedTypes::new(Vec::<ValueType>::new())))
            .build()
            .unwrap_err();

        assert!(matches!(err, PostTypeError::InvalidSchema { .. }));
    }
}
