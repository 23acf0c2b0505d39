//! Building the Criterion harness from [`BenchConfig`].
//!
//! Bench targets plug [`configured`] into `criterion_group!`:
//!
//! ```ignore
//! criterion_group! {
//!     name = benches;
//!     config = microbench_core::harness::configured();
//!     targets = example_benchmark
//! }
//! ```
//!
//! `criterion_group!` applies command-line overrides on top of the returned
//! harness, so flags such as `--sample-size` still win over the file.

use criterion::Criterion;
use tracing_subscriber::EnvFilter;

use crate::config::BenchConfig;
use crate::error::Result;

/// Apply a config to a fresh Criterion harness.
///
/// The config is validated first; Criterion panics on out-of-range values.
pub fn criterion_for(config: &BenchConfig) -> Result<Criterion> {
    config.validate()?;
    Ok(Criterion::default()
        .sample_size(config.sample_size)
        .measurement_time(config.measurement_time())
        .warm_up_time(config.warm_up_time())
        .noise_threshold(config.noise_threshold)
        .significance_level(config.significance_level))
}

/// Settings from [`crate::config::CONFIG_ENV_VAR`], or defaults.
///
/// A missing or invalid file is logged and replaced by the defaults, since
/// the registration macros have no way to surface an error.
pub fn env_config() -> BenchConfig {
    match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring bench config: {e}");
            BenchConfig::default()
        }
    }
}

/// Harness for bench targets, configured from the environment.
pub fn configured() -> Criterion {
    init_tracing();

    match criterion_for(&env_config()) {
        Ok(criterion) => criterion,
        Err(e) => {
            tracing::warn!("Ignoring bench config: {e}");
            Criterion::default()
        }
    }
}

/// Install a stderr log subscriber driven by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
