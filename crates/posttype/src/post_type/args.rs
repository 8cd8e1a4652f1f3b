//! The post-type option schema and the arguments handed to the host.

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::engine::ConfigRecord;
use crate::error::Result;
use crate::schema::{ConfigSchema, OptionSpec, sanitizers};
use crate::value::ValueType;

/// Every option a post type understands, with defaults derived from its slug
/// and display name.
pub fn post_type_schema(slug: &str, name: &str) -> Result<ConfigSchema> {
    ConfigSchema::builder()
        .option(
            "singular_name",
            OptionSpec::new(ValueType::String)
                .with_default(name)
                .sanitize(sanitizers::trim),
        )
        .option(
            "supports",
            OptionSpec::new([ValueType::List, ValueType::Boolean])
                .with_default(json!(["title", "editor"]))
                .sanitize_when(ValueType::List, string_items),
        )
        .option(
            "has_archive",
            OptionSpec::new([ValueType::Boolean, ValueType::String])
                .with_default(true)
                .sanitize_when(ValueType::String, sanitizers::slug),
        )
        .option("public", OptionSpec::new(ValueType::Boolean).with_default(true))
        .option("meta_boxes", OptionSpec::new(ValueType::List).with_default(json!([])))
        .option(
            "rewrite",
            OptionSpec::new([ValueType::Map, ValueType::Boolean])
                .with_default(json!({ "slug": slug }))
                .sanitize_when(ValueType::Map, slugify_rewrite),
        )
        .option(
            "meta_box_prefix",
            OptionSpec::new(ValueType::String).with_default(format!("{slug}-")),
        )
        .option("custom_toc", OptionSpec::new(ValueType::List).with_default(json!([])))
        .option(
            "unset_toc",
            OptionSpec::new(ValueType::List)
                .with_default(json!([]))
                .sanitize(string_items),
        )
        .option(
            "toc_order",
            OptionSpec::new(ValueType::List)
                .with_default(json!([]))
                .sanitize(string_items),
        )
        .build()
}

/// Keep only the string items of a list, trimmed, dropping empties.
fn string_items(value: &Value) -> Option<Value> {
    let items = value.as_array()?;
    let kept: Vec<Value> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Value::from)
        .collect();
    Some(Value::Array(kept))
}

fn slugify_rewrite(value: &Value) -> Option<Value> {
    let mut rewrite = value.as_object()?.clone();
    let slug = rewrite.get("slug")?.as_str()?;
    let slug = Value::String(sanitizers::to_slug(slug));
    rewrite.insert("slug".to_string(), slug);
    Some(Value::Object(rewrite))
}

/// Display labels sent to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Labels {
    pub name: String,
    pub singular_name: String,
}

/// Editor features a post type supports.
///
/// Unset, `false` and an empty list all mean none at all; `true` leaves the
/// choice to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Supports {
    Disabled,
    Enabled,
    Features(Vec<String>),
}

impl Supports {
    fn from_option(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => Supports::Enabled,
            Some(Value::Array(items)) => {
                let features: Vec<String> = items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                if features.is_empty() {
                    Supports::Disabled
                } else {
                    Supports::Features(features)
                }
            }
            _ => Supports::Disabled,
        }
    }
}

impl Serialize for Supports {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Supports::Disabled => serializer.serialize_bool(false),
            Supports::Enabled => serializer.serialize_bool(true),
            Supports::Features(features) => features.serialize(serializer),
        }
    }
}

/// Arguments for the host's registration call. Unset options are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationArgs {
    pub labels: Labels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_archive: Option<Value>,
    pub supports: Supports,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<Value>,
}

impl RegistrationArgs {
    pub(crate) fn from_record(labels: Labels, config: &ConfigRecord) -> Self {
        Self {
            labels,
            public: config.boolean("public"),
            has_archive: config["has_archive"].clone(),
            supports: Supports::from_option(config["supports"].as_ref()),
            rewrite: config["rewrite"].clone(),
        }
    }
}
