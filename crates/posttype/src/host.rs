//! Boundary to the content-management host.
//!
//! The library never talks to a real host directly. A thin adapter implements
//! [`Host`], receives the hooks a post type asks for, and calls back into the
//! [`PostType`](crate::PostType) when the host fires them.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::post_type::RegistrationArgs;

/// A host lifecycle event a post type subscribes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "hook", rename_all = "snake_case")]
pub enum Hook {
    /// Host initialization; time to call [`PostType::register`](crate::PostType::register).
    Init,
    /// The host is building its admin status messages.
    UpdatedMessages,
    /// The host is building the list-table columns for a post type.
    ManageColumns { post_type: String },
    /// The host is rendering one cell of a custom column.
    ManageColumnCell { post_type: String },
}

/// Services the host provides to a post type.
pub trait Host {
    /// Register a post type with the host.
    fn register_post_type(&mut self, slug: &str, args: &RegistrationArgs);

    /// Subscribe to a lifecycle event.
    fn subscribe(&mut self, hook: Hook);

    /// Translate a user-facing string. Defaults to no translation.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    /// Read a stored meta value for a post.
    fn post_meta(&self, post_id: u64, key: &str) -> Option<String>;
}

/// In-memory host that records every call. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Post types registered so far, by slug.
    pub registered: IndexMap<String, RegistrationArgs>,
    /// Hooks subscribed so far, in subscription order.
    pub hooks: Vec<Hook>,
    /// Post meta keyed by `(post_id, key)`.
    pub meta: HashMap<(u64, String), String>,
    /// Translation table; untranslated strings pass through.
    pub translations: HashMap<String, String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a meta value for a post.
    pub fn with_meta(mut self, post_id: u64, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert((post_id, key.into()), value.into());
        self
    }

    /// Add a translation.
    pub fn with_translation(mut self, text: impl Into<String>, translated: impl Into<String>) -> Self {
        self.translations.insert(text.into(), translated.into());
        self
    }
}

impl Host for RecordingHost {
    fn register_post_type(&mut self, slug: &str, args: &RegistrationArgs) {
        self.registered.insert(slug.to_string(), args.clone());
    }

    fn subscribe(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    fn translate(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn post_meta(&self, post_id: u64, key: &str) -> Option<String> {
        self.meta.get(&(post_id, key.to_string())).cloned()
    }
}
