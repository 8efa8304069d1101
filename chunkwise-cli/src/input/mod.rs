//! Document discovery

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;
