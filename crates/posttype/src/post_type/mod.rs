//! Content-type facade built on the verified configuration engine.

mod args;
mod facade;
mod messages;
mod meta_box;

pub use args::{Labels, RegistrationArgs, Supports, post_type_schema};
pub use facade::{CustomColumn, PostType};
pub use messages::{MESSAGE_COUNT, MessageContext};
pub use meta_box::MetaBox;
