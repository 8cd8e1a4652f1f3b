//! Ordered merge of list-table columns.
//!
//! The host hands over its base columns; the caller removes some, adds its
//! own, and optionally asks for a partial order. Ordering is a stable
//! partition, never a sort:
//!
//! 1. the checkbox column, if the directive does not place it,
//! 2. directive keys in directive order,
//! 3. everything else in its existing order.

use indexmap::IndexMap;

/// Key of the host's bulk-selection checkbox column.
pub const CHECKBOX_COLUMN: &str = "cb";

/// Column key → label, in display order.
pub type Columns = IndexMap<String, String>;

/// Remove, add, then order columns.
///
/// Unknown keys in `remove` and stale keys in `order` are ignored. Adding an
/// existing key overwrites its label in place. An empty `order` leaves the
/// post-add order untouched.
pub fn merge_columns<K, L>(
    mut columns: Columns,
    remove: &[String],
    add: impl IntoIterator<Item = (K, L)>,
    order: &[String],
) -> Columns
where
    K: Into<String>,
    L: Into<String>,
{
    for key in remove {
        columns.shift_remove(key);
    }

    for (key, label) in add {
        columns.insert(key.into(), label.into());
    }

    if order.is_empty() {
        return columns;
    }

    let mut ordered = Columns::with_capacity(columns.len());

    if !order.iter().any(|key| key == CHECKBOX_COLUMN) {
        if let Some(label) = columns.shift_remove(CHECKBOX_COLUMN) {
            ordered.insert(CHECKBOX_COLUMN.to_string(), label);
        }
    }

    for key in order {
        if let Some((key, label)) = columns.shift_remove_entry(key.as_str()) {
            ordered.insert(key, label);
        }
    }

    ordered.extend(columns);
    ordered
}

/// Builder form of [`merge_columns`].
#[derive(Debug, Clone, Default)]
pub struct ColumnMerge {
    base: Columns,
    remove: Vec<String>,
    add: Vec<(String, String)>,
    order: Vec<String>,
}

impl ColumnMerge {
    pub fn new(base: Columns) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Columns to drop from the base set.
    pub fn remove<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove.extend(keys.into_iter().map(Into::into));
        self
    }

    /// A column to add (or relabel).
    pub fn add(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.add.push((key.into(), label.into()));
        self
    }

    /// Desired relative order for a subset of columns.
    pub fn order<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn finish(self) -> Columns {
        merge_columns(self.base, &self.remove, self.add, &self.order)
    }
}

/// Build a column set from `(key, label)` pairs.
pub fn columns_from<K, L>(pairs: impl IntoIterator<Item = (K, L)>) -> Columns
where
    K: Into<String>,
    L: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, l)| (k.into(), l.into()))
        .collect()
}
