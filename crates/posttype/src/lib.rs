//! posttype: verified configuration for content-type registration.
//!
//! A content-management host wants a flat, fully defaulted set of options
//! before it registers a content type. This crate resolves caller overrides
//! against a declarative schema, rejecting values of the wrong type and
//! normalizing the rest, then maps the result onto host calls.
//!
//! # Core Pieces
//!
//! - **Engine**: [`resolve`] turns a [`ConfigSchema`] plus overrides into an
//!   immutable [`ConfigRecord`]
//! - **Column merge**: [`merge_columns`] removes, adds and orders list-table columns
//! - **Facade**: [`PostType`] wires both to a [`Host`]
//!
//! # Example
//!
//! ```
//! use posttype::{PostType, RecordingHost, columns_from};
//! use serde_json::json;
//!
//! let overrides = serde_json::from_value(json!({
//!     "singular_name": "Story",
//!     "custom_toc": [{"slug": "author", "name": "Author"}],
//!     "toc_order": ["news-author"]
//! }))
//! .unwrap();
//! let news = PostType::new("news", "News", overrides).unwrap();
//!
//! let mut host = RecordingHost::new();
//! news.attach(&mut host);
//! news.register(&mut host);
//!
//! let base = columns_from([("cb", ""), ("title", "Title"), ("date", "Date")]);
//! let columns = news.columns(base, &host);
//! let keys: Vec<&str> = columns.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["cb", "news-author", "title", "date"]);
//! ```

pub mod columns;
pub mod definition;
pub mod engine;
pub mod error;
pub mod host;
pub mod post_type;
pub mod schema;
pub mod value;

pub use columns::{CHECKBOX_COLUMN, ColumnMerge, Columns, columns_from, merge_columns};
pub use definition::PostTypeDefinition;
pub use engine::{ConfigRecord, Overrides, resolve};
pub use error::{PostTypeError, Result};
pub use host::{Hook, Host, RecordingHost};
pub use post_type::{MessageContext, MetaBox, PostType, RegistrationArgs};
pub use schema::{ConfigSchema, OptionSpec, Sanitizer};
pub use value::{AcceptedTypes, ValueType};
