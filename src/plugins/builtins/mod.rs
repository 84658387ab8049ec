//! Built-in plugins shipped with the shell
//!
//! They register through the same slot-fill channel as third-party plugins.

mod linting;
mod log;
mod status;

pub use linting::{
    compare_reports, LintCategory, LintReport, LintResults, LintingTab, LINTING_TAB,
    TOGGLE_LINTING_ACTION,
};
pub use log::{Log, LogEntry, LogLevel, LogTab, CLEAR_LOG_ACTION, LOG_TAB};
pub use status::{StatusItem, StatusText};
