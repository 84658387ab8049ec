//! Diagnostics for the shell core
//!
//! Targets worth filtering on:
//! - `message` - one line per dispatched `Msg` (pointer moves are skipped)
//! - `modeler_shell::slot` - fill registration churn, at `trace`
//! - `modeler_shell::resize` - drag commits and toggles at `debug`, cancels at `trace`
//! - `modeler_shell::plugins` - contained plugin failures at `warn`/`error`
//! - `modeler_shell::config`, `modeler_shell::layout` - config and layout file I/O
//!
//! The console follows `RUST_LOG`, e.g.
//! `RUST_LOG=message=debug,modeler_shell::resize=debug`. The daily log file
//! under the config dir's `logs/` keeps everything from this crate except
//! registry churn.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console filter when `RUST_LOG` is unset
const DEFAULT_CONSOLE_FILTER: &str = "warn";

/// File filter; registry churn fires on every plugin render
const FILE_FILTER: &str = "warn,message=debug,modeler_shell=debug,modeler_shell::slot=info";

const LOG_FILE: &str = "modeler-shell.log";

/// Install the console layer and, when the logs directory is usable, the file layer
pub fn init() {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(FILE_FILTER)),
        ),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
