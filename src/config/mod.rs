//! Config file model: setting paths, file aliases, the document and its INI codec.

pub mod aliases;
pub mod document;
pub mod ini;
pub mod path;

pub use aliases::AliasTable;
pub use document::{Document, Section};
pub use path::KeyPath;
