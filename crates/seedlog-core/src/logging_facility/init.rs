//! Diagnostics initialization module
//!
//! Installs the global subscriber that receives the facade's own
//! diagnostics. Facade records do not depend on it: every engine owns
//! its sinks.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output on stderr
    Development,
    /// JSON structured output on stderr
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize diagnostics
///
/// Call once at startup; later calls are no-ops.
///
/// # Profiles
///
/// - **Development**: human-readable, `seedlog=debug` unless `RUST_LOG` is set
/// - **Production**: JSON, `seedlog=info` unless `RUST_LOG` is set
/// - **Test**: bare registry; use `init_test_capture()` to collect events
///
/// # Example
///
/// ```
/// use seedlog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // Another subscriber may already be installed by the host application
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("seedlog=debug")),
                )
                .try_init()
                .ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("seedlog=info")),
                )
                .try_init()
                .ok(),
            Profile::Test => tracing_subscriber::registry().try_init().ok(),
        };
    });
}
