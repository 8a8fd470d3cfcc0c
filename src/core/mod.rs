//! Configuration and error types shared by the library and the CLI
//!
//! - **config**: `railjson.toml` parsing and validation
//! - **error**: error types with exit codes and contextual help messages

pub mod config;
pub mod error;
