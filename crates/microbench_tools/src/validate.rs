//! Config file validation.

use std::path::Path;

use microbench_core::config::BenchConfig;

use crate::error::Result;

/// Load a bench config file and check it against the harness limits.
///
/// # Errors
///
/// Returns an error if the file is missing, unparsable, or out of range.
pub fn validate_config_file(path: &Path) -> Result<BenchConfig> {
    let config = BenchConfig::load(path)?;
    tracing::debug!(?config, "Config is within harness limits");
    Ok(config)
}
