//! CLI command implementations.

pub mod build;
pub mod count;
pub mod version;
