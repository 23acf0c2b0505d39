//! # Microbench Development Tools
//!
//! Command-line helpers for working with bench templates:
//! - Scaffolding a new bench file
//! - Validating harness config files

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod scaffold;
pub mod validate;
