//! Post-type definitions loaded from JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::columns::{Columns, columns_from};
use crate::engine::Overrides;
use crate::error::{PostTypeError, Result};

/// Everything needed to build a [`PostType`](crate::PostType) outside of code.
///
/// ```json
/// {
///   "slug": "news",
///   "name": "News",
///   "args": { "singular_name": "Story", "has_archive": "archive" },
///   "base_columns": { "cb": "", "title": "Title", "date": "Date" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTypeDefinition {
    pub slug: String,
    pub name: String,
    /// Option overrides, checked against the post-type schema.
    #[serde(default)]
    pub args: Overrides,
    /// Columns the host would show before this post type changes them.
    #[serde(default = "default_base_columns")]
    pub base_columns: Columns,
}

fn default_base_columns() -> Columns {
    columns_from([("cb", "<input type=\"checkbox\" />"), ("title", "Title"), ("date", "Date")])
}

impl PostTypeDefinition {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            args: Overrides::new(),
            base_columns: default_base_columns(),
        }
    }

    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: PostTypeDefinition = serde_json::from_str(json)?;
        Ok(definition)
    }

    /// Load a definition from a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use posttype::{PostType, PostTypeDefinition};
    /// let definition = PostTypeDefinition::load("news.json").unwrap();
    /// let news = PostType::from_definition(&definition).unwrap();
    /// println!("Registered {}", news.slug());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| PostTypeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let definition: PostTypeDefinition = serde_json::from_reader(reader)?;

        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_defaults() {
        let file = create_test_file(r#"{"slug": "news", "name": "News"}"#);
        let definition = PostTypeDefinition::load(file.path()).unwrap();

        assert_eq!(definition.slug, "news");
        assert!(definition.args.is_empty());
        let keys: Vec<&str> = definition.base_columns.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cb", "title", "date"]);
    }

    #[test]
    fn test_base_columns_keep_file_order() {
        let definition = PostTypeDefinition::from_json(
            r#"{"slug": "a", "name": "A", "base_columns": {"title": "T", "cb": "", "author": "By"}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = definition.base_columns.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "cb", "author"]);
    }

    #[test]
    fn test_missing_file() {
        let err = PostTypeDefinition::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PostTypeError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = PostTypeDefinition::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PostTypeError::Json(_)));
    }
}
