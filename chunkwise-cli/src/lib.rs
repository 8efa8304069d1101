//! Chunkwise CLI library
//!
//! This library provides the command-line interface for chunking PDF and
//! plain-text documents into overlapping, boundary-aware segments.

pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
