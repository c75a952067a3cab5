//! Log setup for the `findpad` binary
//!
//! Two layers are installed:
//! - stderr, filtered by `RUST_LOG` (default `warn`), so search output on
//!   stdout stays clean
//! - `findpad.log` in [`crate::config_paths::logs_dir`], rotated daily and
//!   always at `debug`
//!
//! Useful filters:
//! - `RUST_LOG=message=debug` - every dispatched message (debug builds)
//! - `RUST_LOG=search=debug` - search position and overlay changes per message
//! - `RUST_LOG=findpad::search=debug` - wrap-around and replace-all counts
//! - `RUST_LOG=findpad::model::tab_registry=info` - tabs opened, closed, switched
//! - `RUST_LOG=findpad::update=info` - saves, failed opens, dirty closes

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr and rolling file layers.
///
/// If the logs directory cannot be created, only stderr logging is set up.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "findpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
