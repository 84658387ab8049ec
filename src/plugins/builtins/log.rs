//! Log tab of the bottom panel

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::content::Content;
use crate::layout::TAB_PROP;
use crate::plugins::{Plugin, PluginContext, PluginError};
use crate::slot::{names, FillMeta};

pub const LOG_TAB: &str = "log";
pub const CLEAR_LOG_ACTION: &str = "log.clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug)]
struct LogBuffer {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

/// Shared handle to the log; clones append to the same buffer
#[derive(Debug, Clone)]
pub struct Log {
    inner: Rc<RefCell<LogBuffer>>,
}

impl Log {
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LogBuffer {
                entries: VecDeque::new(),
                max_entries: max_entries.max(1),
            })),
        }
    }

    pub fn push(&self, level: LogLevel, message: impl Into<String>) {
        let mut buffer = self.inner.borrow_mut();
        if buffer.entries.len() == buffer.max_entries {
            buffer.entries.pop_front();
        }
        buffer.entries.push_back(LogEntry {
            level,
            message: message.into(),
        });
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner.borrow().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Publishes the log as a bottom-panel tab, with a clear action
#[derive(Debug)]
pub struct LogTab {
    log: Log,
}

impl LogTab {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl Plugin<Content> for LogTab {
    fn name(&self) -> &str {
        "log"
    }

    fn render(&mut self, ctx: &mut PluginContext<Content>) -> Result<(), PluginError> {
        let lines = self
            .log
            .entries()
            .into_iter()
            .map(|entry| format!("[{}] {}", entry.level, entry.message))
            .collect();

        ctx.fill(
            "tab",
            names::BOTTOM_PANEL,
            Content::Lines(lines),
            FillMeta::new()
                .with_key(LOG_TAB)
                .with_label("Output")
                .with_priority(1)
                .with_action(CLEAR_LOG_ACTION),
        );
        ctx.fill(
            "clear",
            names::TAB_ACTIONS,
            Content::button("Clear", CLEAR_LOG_ACTION),
            FillMeta::new().with_prop(TAB_PROP, serde_json::json!(LOG_TAB)),
        );
        Ok(())
    }
}
