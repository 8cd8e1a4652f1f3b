//! The post-type facade: resolved configuration mapped onto host calls.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::args::{Labels, RegistrationArgs, post_type_schema};
use super::messages::{self, MessageContext};
use super::meta_box::{MetaBox, extract_meta_boxes};
use crate::columns::{Columns, merge_columns};
use crate::definition::PostTypeDefinition;
use crate::engine::{ConfigRecord, Overrides, resolve};
use crate::error::{PostTypeError, Result};
use crate::host::{Hook, Host};

type RenderFn = dyn Fn(u64) -> String + Send + Sync;

/// A custom list-table column declared through `custom_toc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomColumn {
    /// Namespaced key: `<post type slug>-<column slug>`.
    pub key: String,
    /// Column slug as declared.
    pub slug: String,
    pub label: String,
}

/// A content type whose options have been verified against the post-type schema.
pub struct PostType {
    slug: String,
    name: String,
    config: ConfigRecord,
    meta_boxes: Vec<MetaBox>,
    custom_columns: Vec<CustomColumn>,
    renderers: HashMap<String, Arc<RenderFn>>,
}

impl PostType {
    /// Resolve `overrides` against the post-type schema.
    ///
    /// Fails if the slug or name is empty, or if any override has a type its
    /// option does not accept.
    ///
    /// # Example
    ///
    /// ```
    /// use posttype::{Overrides, PostType};
    ///
    /// let news = PostType::new("news", "News", Overrides::new()).unwrap();
    /// assert_eq!(news.singular_name(), "News");
    /// assert!(news.meta_box("missing").is_none());
    /// ```
    pub fn new(slug: impl Into<String>, name: impl Into<String>, overrides: Overrides) -> Result<Self> {
        let slug = slug.into();
        let name = name.into();

        if slug.trim().is_empty() {
            return Err(PostTypeError::InvalidDefinition("post type slug is empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(PostTypeError::InvalidDefinition(format!(
                "post type '{slug}' has an empty name"
            )));
        }

        let schema = post_type_schema(&slug, &name)?;
        let config = resolve(&schema, &overrides)?;

        let prefix = config.string("meta_box_prefix").unwrap_or_default();
        let meta_boxes = extract_meta_boxes(config.list("meta_boxes"), prefix, &slug);
        let custom_columns = extract_custom_columns(config.list("custom_toc"), &slug);

        debug!(
            post_type = %slug,
            meta_boxes = meta_boxes.len(),
            custom_columns = custom_columns.len(),
            "post type configured"
        );

        Ok(Self {
            slug,
            name,
            config,
            meta_boxes,
            custom_columns,
            renderers: HashMap::new(),
        })
    }

    /// Build a post type from a loaded definition.
    pub fn from_definition(definition: &PostTypeDefinition) -> Result<Self> {
        Self::new(&definition.slug, &definition.name, definition.args.clone())
    }

    /// Render a custom column's cells with `render` instead of post meta.
    pub fn with_column_renderer(
        mut self,
        column_slug: impl Into<String>,
        render: impl Fn(u64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.renderers.insert(column_slug.into(), Arc::new(render));
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Singular label; falls back to the name when the option is unset or
    /// blank.
    pub fn singular_name(&self) -> &str {
        self.config
            .string("singular_name")
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    /// The resolved configuration record.
    pub fn config(&self) -> &ConfigRecord {
        &self.config
    }

    /// Look up a meta box by the slug it was declared with.
    pub fn meta_box(&self, slug: &str) -> Option<&MetaBox> {
        self.meta_boxes.iter().find(|m| m.key() == slug)
    }

    pub fn meta_boxes(&self) -> &[MetaBox] {
        &self.meta_boxes
    }

    pub fn custom_columns(&self) -> &[CustomColumn] {
        &self.custom_columns
    }

    /// Hooks the host adapter should subscribe for this post type.
    pub fn hooks(&self) -> Vec<Hook> {
        let mut hooks = vec![Hook::Init, Hook::UpdatedMessages];
        if !self.config.list("custom_toc").is_empty() {
            hooks.push(Hook::ManageColumns {
                post_type: self.slug.clone(),
            });
            hooks.push(Hook::ManageColumnCell {
                post_type: self.slug.clone(),
            });
        }
        hooks
    }

    /// Subscribe every hook from [`hooks`](Self::hooks) with the host.
    pub fn attach(&self, host: &mut dyn Host) {
        for hook in self.hooks() {
            host.subscribe(hook);
        }
    }

    /// Arguments for the host's registration call, with translated labels.
    pub fn registration_args(&self, host: &dyn Host) -> RegistrationArgs {
        let labels = Labels {
            name: host.translate(&self.name),
            singular_name: host.translate(self.singular_name()),
        };
        RegistrationArgs::from_record(labels, &self.config)
    }

    /// Register the post type with the host. Called on [`Hook::Init`].
    pub fn register(&self, host: &mut dyn Host) {
        let args = self.registration_args(host);
        host.register_post_type(&self.slug, &args);
    }

    /// Status messages for this post type. Called on [`Hook::UpdatedMessages`].
    pub fn updated_messages(&self, ctx: &MessageContext, host: &dyn Host) -> Vec<Option<String>> {
        messages::updated_messages(self.singular_name(), ctx, host)
    }

    /// Merge the host's columns with this post type's column options.
    /// Called on [`Hook::ManageColumns`].
    pub fn columns(&self, base: Columns, host: &dyn Host) -> Columns {
        let remove = string_list(self.config.list("unset_toc"));
        let order = string_list(self.config.list("toc_order"));
        let add = self
            .custom_columns
            .iter()
            .map(|c| (c.key.clone(), host.translate(&c.label)));

        merge_columns(base, &remove, add, &order)
    }

    /// Content of one custom-column cell. Called on [`Hook::ManageColumnCell`].
    ///
    /// Returns `None` for columns this post type did not declare.
    pub fn column_cell(&self, column: &str, post_id: u64, host: &dyn Host) -> Option<String> {
        let custom = self.custom_columns.iter().find(|c| c.key == column)?;

        match self.renderers.get(&custom.slug) {
            Some(render) => Some(render(post_id)),
            None => Some(host.post_meta(post_id, &custom.key).unwrap_or_default()),
        }
    }
}

impl fmt::Debug for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostType")
            .field("slug", &self.slug)
            .field("name", &self.name)
            .field("config", &self.config)
            .field("meta_boxes", &self.meta_boxes)
            .field("custom_columns", &self.custom_columns)
            .finish_non_exhaustive()
    }
}

fn string_list(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn extract_custom_columns(entries: &[Value], owner: &str) -> Vec<CustomColumn> {
    entries
        .iter()
        .filter_map(|entry| {
            let slug = entry.get("slug")?.as_str().filter(|s| !s.is_empty())?;
            let label = entry.get("name")?.as_str()?;
            Some(CustomColumn {
                key: format!("{owner}-{slug}"),
                slug: slug.to_string(),
                label: label.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_from;
    use crate::host::RecordingHost;
    use serde_json::json;

    fn overrides(value: Value) -> Overrides {
        serde_json::from_value(value).unwrap()
    }

    fn news(args: Value) -> PostType {
        PostType::new("news", "News", overrides(args)).unwrap()
    }

    #[test]
    fn test_accessors() {
        let post_type = news(json!({"singular_name": " Story "}));

        assert_eq!(post_type.slug(), "news");
        assert_eq!(post_type.name(), "News");
        assert_eq!(post_type.singular_name(), "Story");
    }

    #[test]
    fn test_unset_singular_name_falls_back() {
        let post_type = news(json!({"singular_name": null}));
        assert_eq!(post_type.singular_name(), "News");
    }

    #[test]
    fn test_blank_singular_name_falls_back() {
        let post_type = news(json!({"singular_name": "   "}));
        assert_eq!(post_type.singular_name(), "News");

        let mut host = RecordingHost::new();
        post_type.register(&mut host);
        assert_eq!(host.registered["news"].labels.singular_name, "News");
    }

    #[test]
    fn test_empty_slug_rejected() {
        let err = PostType::new(" ", "News", Overrides::new()).unwrap_err();
        assert!(matches!(err, PostTypeError::InvalidDefinition(_)));
    }

    #[test]
    fn test_schema_violation_aborts_construction() {
        let err = PostType::new("news", "News", overrides(json!({"public": "yes"}))).unwrap_err();
        assert!(matches!(err, PostTypeError::SchemaViolation { .. }));
    }

    #[test]
    fn test_hooks_without_custom_columns() {
        let post_type = news(json!({}));
        assert_eq!(post_type.hooks(), vec![Hook::Init, Hook::UpdatedMessages]);
    }

    #[test]
    fn test_attach_subscribes_column_hooks() {
        let post_type = news(json!({"custom_toc": [{"slug": "author", "name": "Author"}]}));
        let mut host = RecordingHost::new();
        post_type.attach(&mut host);

        assert_eq!(host.hooks.len(), 4);
        assert!(host.hooks.contains(&Hook::ManageColumnCell {
            post_type: "news".to_string()
        }));
    }

    #[test]
    fn test_register_translates_labels() {
        let post_type = news(json!({"singular_name": "Story"}));
        let mut host = RecordingHost::new().with_translation("Story", "Historia");
        post_type.register(&mut host);

        let args = &host.registered["news"];
        assert_eq!(args.labels.name, "News");
        assert_eq!(args.labels.singular_name, "Historia");
    }

    #[test]
    fn test_columns_remove_add_order() {
        let post_type = news(json!({
            "unset_toc": ["date"],
            "custom_toc": [
                {"slug": "author", "name": "Author"},
                {"name": "No slug"}
            ],
            "toc_order": ["news-author", "title"]
        }));
        let host = RecordingHost::new();
        let base = columns_from([("cb", ""), ("title", "Title"), ("date", "Date")]);

        let columns = post_type.columns(base, &host);
        let keys: Vec<&str> = columns.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cb", "news-author", "title"]);
        assert_eq!(columns["news-author"], "Author");
    }

    #[test]
    fn test_column_cell_reads_meta_or_renderer() {
        let host = RecordingHost::new().with_meta(7, "news-author", "Ada");
        let post_type = news(json!({"custom_toc": [
            {"slug": "author", "name": "Author"},
            {"slug": "words", "name": "Words"}
        ]}))
        .with_column_renderer("words", |id| format!("{} words", id * 100));

        assert_eq!(post_type.column_cell("news-author", 7, &host).as_deref(), Some("Ada"));
        assert_eq!(post_type.column_cell("news-author", 8, &host).as_deref(), Some(""));
        assert_eq!(post_type.column_cell("news-words", 3, &host).as_deref(), Some("300 words"));
        assert_eq!(post_type.column_cell("title", 7, &host), None);
    }

    #[test]
    fn test_meta_box_lookup() {
        let post_type = news(json!({"meta_boxes": [
            {"name": "Missing slug"},
            {"slug": "byline", "name": "Byline"}
        ]}));

        assert_eq!(post_type.meta_boxes().len(), 1);
        let meta_box = post_type.meta_box("byline").unwrap();
        assert_eq!(meta_box.slug, "news-byline");
        assert_eq!(meta_box.post_type, "news");
        assert!(post_type.meta_box("news-byline").is_none());
    }
}
