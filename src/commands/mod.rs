//! CLI commands for railjson
//!
//! ## Export
//! - **generate**: validate a description and write its RailJson document
//! - **check**: run the validation checks and report
//!
//! ## Inspection
//! - **inspect**: version compatibility and counts of an existing document
//! - **schema-version**: print the schema version of this build
//!
//! ## Setup
//! - **init**: write a default railjson.toml
//!
//! Commands that honour configuration receive the loaded `GeneratorConfig`.

pub mod check;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod schema_version;

pub use check::run_check;
pub use generate::run_generate;
pub use init::run_init;
pub use inspect::run_inspect;
pub use schema_version::run_schema_version;
