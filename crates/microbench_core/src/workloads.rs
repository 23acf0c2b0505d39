//! Placeholder workloads timed by the bench templates.
//!
//! These are deliberately trivial. A template is only useful once its loop
//! body has been replaced with real code; until then it measures allocation
//! of an empty string or a small vector of them.

use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;

/// Number of strings built by the vector template.
pub const DEFAULT_VEC_LEN: usize = 2;

/// Construct an empty string.
#[inline]
#[must_use]
pub fn empty_string() -> String {
    String::new()
}

/// Construct a vector holding `len` empty strings.
#[inline]
#[must_use]
pub fn string_vec(len: usize) -> Vec<String> {
    vec![String::new(); len]
}

/// A placeholder workload that a template can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Workload {
    /// Build an empty `String`.
    #[default]
    EmptyString,
    /// Build a `Vec` of empty strings.
    StringVec,
}

impl Workload {
    /// Every known workload, in listing order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::EmptyString, Self::StringVec]
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EmptyString => "string",
            Self::StringVec => "vec",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EmptyString => "construct an empty String",
            Self::StringVec => "construct a Vec of empty Strings",
        }
    }

    /// Rust expression that performs one iteration of this workload,
    /// written out verbatim by scaffolded bench files.
    #[must_use]
    pub const fn snippet(self) -> &'static str {
        match self {
            Self::EmptyString => "String::new()",
            Self::StringVec => "vec![String::new(); 2]",
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Workload {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "empty_string" => Ok(Self::EmptyString),
            "vec" | "string_vec" => Ok(Self::StringVec),
            _ => Err(BenchError::UnknownWorkload(s.to_string())),
        }
    }
}
