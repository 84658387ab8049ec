//! Problems tab and lint status-bar item
//!
//! Reports come from an external linter. Older report producers spell the
//! warning category both `warn` and `warning`; both parse to
//! [`LintCategory::Warning`] so they sort together.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::plugins::{Plugin, PluginContext, PluginError};
use crate::slot::{names, FillMeta};

pub const LINTING_TAB: &str = "linting";
pub const TOGGLE_LINTING_ACTION: &str = "linting.toggle";

/// Severity of a lint report, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintCategory {
    Error,
    #[serde(alias = "warn")]
    Warning,
    Info,
}

impl LintCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "error" => Some(LintCategory::Error),
            "warn" | "warning" => Some(LintCategory::Warning),
            "info" => Some(LintCategory::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LintCategory::Error => "error",
            LintCategory::Warning => "warning",
            LintCategory::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Id of the diagram element the report is about
    pub id: String,
    pub message: String,
    pub category: LintCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// Order reports by severity, then element id, then message
pub fn compare_reports(a: &LintReport, b: &LintReport) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| a.message.cmp(&b.message))
}

/// Shared handle to the current lint results
#[derive(Debug, Clone, Default)]
pub struct LintResults {
    inner: Rc<RefCell<Vec<LintReport>>>,
}

impl LintResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all reports, keeping them sorted
    pub fn set(&self, mut reports: Vec<LintReport>) {
        reports.sort_by(compare_reports);
        *self.inner.borrow_mut() = reports;
    }

    pub fn reports(&self) -> Vec<LintReport> {
        self.inner.borrow().clone()
    }

    pub fn count(&self, category: LintCategory) -> usize {
        self.inner
            .borrow()
            .iter()
            .filter(|r| r.category == category)
            .count()
    }
}

/// Publishes the problems tab and an error/warning counter in the status bar
#[derive(Debug)]
pub struct LintingTab {
    results: LintResults,
}

impl LintingTab {
    pub fn new(results: &LintResults) -> Self {
        Self {
            results: results.clone(),
        }
    }
}

impl Plugin<Content> for LintingTab {
    fn name(&self) -> &str {
        "linting"
    }

    fn render(&mut self, ctx: &mut PluginContext<Content>) -> Result<(), PluginError> {
        let reports = self.results.reports();
        let lines = if reports.is_empty() {
            vec!["No problems found.".to_string()]
        } else {
            reports
                .iter()
                .map(|r| format!("{:<8} {:<20} {}", r.category.as_str(), r.id, r.message))
                .collect()
        };

        ctx.fill(
            "tab",
            names::BOTTOM_PANEL,
            Content::Lines(lines),
            FillMeta::new()
                .with_key(LINTING_TAB)
                .with_label("Problems")
                .with_priority(2),
        );

        let errors = self.results.count(LintCategory::Error);
        let warnings = self.results.count(LintCategory::Warning);
        ctx.fill(
            "status",
            names::STATUS_BAR_FILE,
            Content::button(
                format!("{} errors, {} warnings", errors, warnings),
                TOGGLE_LINTING_ACTION,
            ),
            FillMeta::new().with_group("1_linting"),
        );
        Ok(())
    }
}
