//! Logging utilities for plugkit
//!
//! Installs the tracing subscriber used by hosts and provides [`Pretty`] for
//! dumping serde values inside log lines.

use serde::Serialize;
use std::fmt::Debug;
use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init_tracing`] for the log filter
pub const LOG_ENV_VAR: &str = "PLUGKIT_LOG";

/// Install a global fmt subscriber.
///
/// The filter comes from `PLUGKIT_LOG` when set, otherwise from
/// `default_level` (for example `"info"` or `"plugkit_fields=debug"`).
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Wrapper for pretty-printing types in logs as YAML
///
/// ```ignore
/// use plugkit_common::Pretty;
/// use tracing::debug;
///
/// debug!("Field properties: {}", Pretty(&properties));
/// ```
///
/// Outputs YAML with a leading newline. Debug is used as a fallback if YAML
/// serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
