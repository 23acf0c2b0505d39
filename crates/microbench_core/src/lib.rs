//! # Microbench Core
//!
//! Placeholder workloads for Criterion micro-benchmarks.
//!
//! The bench targets under `benches/` are templates: each times a trivial
//! operation inside a Criterion loop and is meant to be copied and edited
//! before real workload code goes in. Measurement, statistics and reporting
//! all come from Criterion itself.
//!
//! ## Crate Structure
//!
//! - [`workloads`] - The trivial operations the templates time
//! - [`config`] - RON-backed harness settings
//! - [`harness`] - Building a [`criterion::Criterion`] from settings
//! - [`error`] - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod harness;
pub mod workloads;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::error::{BenchError, Result};
    pub use crate::harness::{configured, criterion_for, env_config};
    pub use crate::workloads::{empty_string, string_vec, Workload, DEFAULT_VEC_LEN};
}
