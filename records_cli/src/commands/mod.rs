//! CLI command implementations.

pub mod records;
