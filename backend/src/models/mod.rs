//! Document schema.

pub mod document;

pub use document::*;
