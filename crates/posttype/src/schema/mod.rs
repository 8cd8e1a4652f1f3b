//! Declarative option schemas: defaults, accepted types and sanitizers.

mod option;
pub mod sanitizers;
mod table;

pub use option::{OptionSpec, Sanitizer};
pub use table::{ConfigSchema, ConfigSchemaBuilder};
