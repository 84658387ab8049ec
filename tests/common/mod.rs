//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use modeler_shell::config::ShellConfig;
use modeler_shell::content::Content;
use modeler_shell::layout::LayoutState;
use modeler_shell::model::ShellModel;
use modeler_shell::plugins::{CollectingReporter, Plugin, PluginContext, PluginError};
use modeler_shell::resize::Viewport;
use modeler_shell::slot::{FillMeta, SlotOrder, SlotRegistry};

pub const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// Create a model with default config and layout, no plugins mounted
pub fn test_model() -> (ShellModel, CollectingReporter) {
    let config = ShellConfig::default();
    let layout = LayoutState::from_config(&config);
    let reporter = CollectingReporter::new();
    let model = ShellModel::new(config, layout, VIEWPORT, reporter.clone())
        .expect("default config is valid");
    (model, reporter)
}

/// Create a model with the built-in plugins mounted
pub fn test_model_with_builtins() -> (ShellModel, CollectingReporter) {
    let (mut model, reporter) = test_model();
    model.mount_builtins();
    (model, reporter)
}

/// Contents of a slot in the given order
pub fn contents<C: Clone>(registry: &SlotRegistry<C>, slot: &str, order: SlotOrder) -> Vec<C> {
    registry
        .query(slot, order)
        .into_iter()
        .map(|r| r.content)
        .collect()
}

/// Plugin publishing fixed text into one slot
pub struct StaticPlugin {
    pub name: String,
    pub slot: &'static str,
    pub text: String,
    pub priority: Option<i32>,
}

impl StaticPlugin {
    pub fn new(name: &str, slot: &'static str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            slot,
            text: text.to_string(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Plugin<Content> for StaticPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&mut self, ctx: &mut PluginContext<Content>) -> Result<(), PluginError> {
        let mut meta = FillMeta::new().with_key(self.name.clone());
        if let Some(priority) = self.priority {
            meta = meta.with_priority(priority);
        }
        ctx.fill("main", self.slot, Content::text(self.text.clone()), meta);
        Ok(())
    }
}
