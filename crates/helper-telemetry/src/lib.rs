//! # Helper Telemetry
//!
//! Structured logging for the cross-helper components.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use helper_telemetry::{init_telemetry, TelemetryConfig};
//!
//! init_telemetry(&TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XH_SERVICE_NAME` | `cross-helper` | Service name |
//! | `XH_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `XH_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `XH_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Log filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Tracing already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Initialize logging from `config`.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)
}

/// Span carrying the component id.
///
/// ```rust,ignore
/// let _span = component_span!("execute_extrinsic", component = "03", call = %name);
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TelemetryError::Filter("bad".to_string());
        assert_eq!(err.to_string(), "Invalid log filter: bad");
    }

    #[test]
    fn test_component_span() {
        let span = component_span!("lookup", component = "01");
        let _entered = span.enter();
    }
}
