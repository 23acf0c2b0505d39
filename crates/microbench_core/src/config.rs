//! Harness settings loaded from RON.
//!
//! Every field is optional; anything left out keeps Criterion's own default.
//! Unknown fields are rejected so a misspelt key is never silently ignored.
//!
//! # Example RON
//!
//! ```ron
//! BenchConfig(
//!     sample_size: 50,
//!     measurement_time_ms: 2000,
//!     warm_up_time_ms: 500,
//!     noise_threshold: 0.02,
//!     significance_level: 0.05,
//!     vec_len: 2,
//! )
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::workloads::DEFAULT_VEC_LEN;

/// Environment variable naming a config file for the bench targets.
pub const CONFIG_ENV_VAR: &str = "MICROBENCH_CONFIG";

/// Smallest sample size Criterion accepts.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Largest vector the vector workload may build per iteration.
pub const MAX_VEC_LEN: usize = 1 << 20;

/// Settings applied to the Criterion harness before benches run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of samples collected per benchmark.
    pub sample_size: usize,
    /// Time spent measuring each benchmark, in milliseconds.
    pub measurement_time_ms: u64,
    /// Time spent warming up before measurement, in milliseconds.
    pub warm_up_time_ms: u64,
    /// Relative change below which a difference is treated as noise.
    pub noise_threshold: f64,
    /// Significance level for change detection.
    pub significance_level: f64,
    /// Length of the vector built by the vector workload.
    pub vec_len: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            measurement_time_ms: 5_000,
            warm_up_time_ms: 3_000,
            noise_threshold: 0.01,
            significance_level: 0.05,
            vec_len: DEFAULT_VEC_LEN,
        }
    }
}

impl BenchConfig {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BenchError::ConfigNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded bench config");
        Ok(config)
    }

    /// Parse and validate a config from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        let config: Self = ron::from_str(ron)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults if unset.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        Self::load_optional(path.as_deref().map(Path::new))
    }

    /// Check every setting against the ranges Criterion accepts.
    ///
    /// Criterion asserts on these itself, so an out-of-range value would
    /// otherwise abort the bench binary.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(invalid(
                "sample_size",
                format!("must be at least {MIN_SAMPLE_SIZE}, got {}", self.sample_size),
            ));
        }
        if self.measurement_time_ms == 0 {
            return Err(invalid("measurement_time_ms", "must be greater than zero".into()));
        }
        if self.warm_up_time_ms == 0 {
            return Err(invalid("warm_up_time_ms", "must be greater than zero".into()));
        }
        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(invalid(
                "noise_threshold",
                format!("must be a non-negative number, got {}", self.noise_threshold),
            ));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(invalid(
                "significance_level",
                format!("must be between 0 and 1, got {}", self.significance_level),
            ));
        }
        if self.vec_len > MAX_VEC_LEN {
            return Err(invalid(
                "vec_len",
                format!("must be at most {MAX_VEC_LEN}, got {}", self.vec_len),
            ));
        }
        Ok(())
    }

    /// Measurement time as a [`Duration`].
    #[must_use]
    pub fn measurement_time(&self) -> Duration {
        Duration::from_millis(self.measurement_time_ms)
    }

    /// Warm-up time as a [`Duration`].
    #[must_use]
    pub fn warm_up_time(&self) -> Duration {
        Duration::from_millis(self.warm_up_time_ms)
    }
}

fn invalid(field: &'static str, message: String) -> BenchError {
    BenchError::InvalidSetting { field, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        BenchConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = BenchConfig::from_ron_str("(sample_size: 20)").unwrap();
        assert_eq!(config.sample_size, 20);
        assert_eq!(config.measurement_time_ms, 5_000);
        assert_eq!(config.vec_len, DEFAULT_VEC_LEN);
    }

    #[test]
    fn named_struct_ron_parses() {
        let config = BenchConfig::from_ron_str(
            "BenchConfig(measurement_time_ms: 250, warm_up_time_ms: 100, vec_len: 8)",
        )
        .unwrap();
        assert_eq!(config.measurement_time(), Duration::from_millis(250));
        assert_eq!(config.warm_up_time(), Duration::from_millis(100));
        assert_eq!(config.vec_len, 8);
    }

    #[test]
    fn small_sample_size_is_rejected() {
        let err = BenchConfig::from_ron_str("(sample_size: 9)").unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidSetting { field: "sample_size", .. }
        ));
    }

    #[test]
    fn zero_durations_are_rejected() {
        let err = BenchConfig::from_ron_str("(measurement_time_ms: 0)").unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidSetting { field: "measurement_time_ms", .. }
        ));
        let err = BenchConfig::from_ron_str("(warm_up_time_ms: 0)").unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidSetting { field: "warm_up_time_ms", .. }
        ));
    }

    #[test]
    fn significance_level_bounds_are_exclusive() {
        for level in ["0.0", "1.0", "1.5"] {
            let ron = format!("(significance_level: {level})");
            let err = BenchConfig::from_ron_str(&ron).unwrap_err();
            assert!(matches!(
                err,
                BenchError::InvalidSetting { field: "significance_level", .. }
            ));
        }
    }

    #[test]
    fn negative_noise_threshold_is_rejected() {
        let config = BenchConfig {
            noise_threshold: -0.1,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn misspelt_field_is_a_parse_error() {
        let err = BenchConfig::from_ron_str("(sampel_size: 5)").unwrap_err();
        assert!(matches!(err, BenchError::ParseError(_)));
    }

    #[test]
    fn vec_len_is_capped() {
        let at_cap = format!("(vec_len: {MAX_VEC_LEN})");
        assert_eq!(BenchConfig::from_ron_str(&at_cap).unwrap().vec_len, MAX_VEC_LEN);

        let err = BenchConfig::from_ron_str("(vec_len: 2000000)").unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidSetting { field: "vec_len", .. }
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = BenchConfig::from_ron_str("(sample_size: \"many\")").unwrap_err();
        assert!(matches!(err, BenchError::ParseError(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(sample_size: 30, vec_len: 4)").unwrap();
        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.sample_size, 30);
        assert_eq!(config.vec_len, 4);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = BenchConfig::load(dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, BenchError::ConfigNotFound(_)));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(BenchConfig::load_optional(None).unwrap(), BenchConfig::default());
    }

    #[test]
    fn config_round_trips_through_ron() {
        let config = BenchConfig {
            sample_size: 42,
            ..BenchConfig::default()
        };
        let text = ron::to_string(&config).unwrap();
        assert_eq!(BenchConfig::from_ron_str(&text).unwrap(), config);
    }
}
