//! Validation checks over an infrastructure model
//!
//! All checks implement the `Check` trait and are registered in
//! `create_default_runner()`. Adding a check does not touch the commands.
//!
//! # Built-in Checks
//!
//! - **duplicate-labels**: objects repeating a label within their collection
//! - **orphan-operational-point-parts**: parts of undeclared operational points
//! - **dangling-references**: labels that resolve to nothing
//! - **positions-in-range**: positions and ranges outside their track
//! - **track-connectivity**: disconnected track islands (thorough mode only)
//!
//! # Example
//!
//! ```rust,ignore
//! use railjson_gen::checks::{CheckContext, create_default_runner};
//!
//! let runner = create_default_runner();
//! let report = runner.run_all(&CheckContext { infra: &infra, thorough: true });
//!
//! for result in &report.results {
//!   if !result.passed {
//!     println!("❌ {}: {}", result.check_name, result.message);
//!   }
//! }
//! ```

mod connectivity;
mod duplicates;
mod orphans;
mod positions;
mod references;
mod runner;
mod trait_def;

pub use runner::{CheckReport, CheckRunner, create_default_runner};
pub use trait_def::{Check, CheckContext, CheckResult, Severity};
