//! CLI command implementations.

mod list;

pub use list::list;
