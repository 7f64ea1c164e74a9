//! CLI command implementations

pub mod counts;
pub mod view;
