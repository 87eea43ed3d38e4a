//! Shared data model for variantsmith output documents.

pub mod defs;

pub use defs::*;
