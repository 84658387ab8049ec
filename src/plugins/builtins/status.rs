//! Generic text item for either status-bar region

use std::cell::RefCell;
use std::rc::Rc;

use crate::content::Content;
use crate::plugins::{Plugin, PluginContext, PluginError};
use crate::slot::FillMeta;

/// Shared text shown by a [`StatusItem`]; empty text hides the item
#[derive(Debug, Clone, Default)]
pub struct StatusText {
    inner: Rc<RefCell<String>>,
}

impl StatusText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(text.into())),
        }
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.inner.borrow_mut() = text.into();
    }

    pub fn get(&self) -> String {
        self.inner.borrow().clone()
    }
}

#[derive(Debug)]
pub struct StatusItem {
    name: String,
    slot: &'static str,
    text: StatusText,
}

impl StatusItem {
    pub fn new(name: impl Into<String>, slot: &'static str, text: &StatusText) -> Self {
        Self {
            name: name.into(),
            slot,
            text: text.clone(),
        }
    }
}

impl Plugin<Content> for StatusItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&mut self, ctx: &mut PluginContext<Content>) -> Result<(), PluginError> {
        let text = self.text.get();
        // Not filling withdraws the item after this render
        if !text.is_empty() {
            ctx.fill("item", self.slot, Content::Text(text), FillMeta::new());
        }
        Ok(())
    }
}
