//! Logger setup for controllers embedding the engine.
//!
//! The library itself only emits through the `log` facade; nothing is logged
//! per segment. A controller that wants to see table construction and the
//! popcount decision calls `enable_verbose_logging` once at startup.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use crate::error::PrimescanError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at Info level printing `[LEVEL] message`, either to
/// stderr or appended to `log_file`. Only the first call has any effect.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), PrimescanError> {
    let target = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    let mut result = Ok(());
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        result = builder
            .try_init()
            .map_err(|e| PrimescanError::Logging(e.to_string()));
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_log_directory_is_an_io_error() {
        let path = Path::new("/nonexistent-primescan-dir/analysis.log");
        let result = enable_verbose_logging(Some(path));
        assert!(matches!(result, Err(PrimescanError::Io(_))));
    }
}
