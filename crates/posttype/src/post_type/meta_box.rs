//! Meta-box entries extracted from the `meta_boxes` option.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Key in a meta-box entry naming the post type it attaches to.
const OWNER_KEY: &str = "post-type";

/// A meta box declared by a post type, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaBox {
    /// Slug as declared by the caller.
    #[serde(skip)]
    pub(crate) key: String,
    /// Namespaced slug: the post type's meta-box prefix plus the declared slug.
    pub slug: String,
    pub name: String,
    /// Post type the box attaches to.
    pub post_type: String,
    /// Everything else in the entry, forwarded untouched.
    pub args: Map<String, Value>,
}

impl MetaBox {
    /// Slug as declared in the entry, without the prefix.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Build meta boxes from raw entries. Entries without a non-empty string
/// `slug` and `name` are dropped.
pub(crate) fn extract_meta_boxes(entries: &[Value], prefix: &str, owner: &str) -> Vec<MetaBox> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let meta_box = build_meta_box(entry, prefix, owner);
            if meta_box.is_none() {
                debug!(index, "dropping meta box entry without slug or name");
            }
            meta_box
        })
        .collect()
}

fn build_meta_box(entry: &Value, prefix: &str, owner: &str) -> Option<MetaBox> {
    let mut args = entry.as_object()?.clone();

    let key = non_empty_string(args.remove("slug"));
    let name = non_empty_string(args.remove("name"));
    let (key, name) = (key?, name?);

    let post_type = match args.remove(OWNER_KEY) {
        Some(Value::String(owner)) if !owner.is_empty() => owner,
        _ => owner.to_string(),
    };

    Some(MetaBox {
        slug: format!("{prefix}{key}"),
        key,
        name,
        post_type,
        args,
    })
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
