//! Plugin loader with per-plugin failure containment
//!
//! Each plugin render runs inside its own containment step. A plugin that
//! returns an error or panics is torn down on its own: its fills are withdrawn,
//! its subscriptions cancelled, it is never rendered again, and exactly one
//! report naming it goes to the error reporter. The shared registry and every
//! other plugin carry on untouched.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use super::context::PluginContext;
use super::{Plugin, PluginError};
use crate::slot::SlotRegistry;

/// A contained plugin failure, annotated with the plugin that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginReport {
    pub plugin: String,
    pub message: String,
}

/// Receives contained plugin failures
pub trait ErrorReporter {
    fn report(&mut self, report: PluginReport);
}

/// Logs reports through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&mut self, report: PluginReport) {
        tracing::error!(plugin = %report.plugin, "{}", report.message);
    }
}

/// Keeps reports in memory; clones share the same list
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    reports: Rc<RefCell<Vec<PluginReport>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<PluginReport> {
        self.reports.borrow().clone()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, report: PluginReport) {
        self.reports.borrow_mut().push(report);
    }
}

/// Lifecycle state of a mounted plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    Active,
    /// Contained after a failure; holds the error text
    Failed(String),
}

struct MountedPlugin<C> {
    name: String,
    plugin: Box<dyn Plugin<C>>,
    ctx: PluginContext<C>,
    status: PluginStatus,
}

/// Mounts plugins and renders each of them in isolation
pub struct PluginLoader<C> {
    registry: SlotRegistry<C>,
    reporter: Box<dyn ErrorReporter>,
    plugins: Vec<MountedPlugin<C>>,
}

impl<C> PluginLoader<C> {
    pub fn new(registry: &SlotRegistry<C>, reporter: impl ErrorReporter + 'static) -> Self {
        Self {
            registry: registry.clone(),
            reporter: Box::new(reporter),
            plugins: Vec::new(),
        }
    }

    /// Mount a plugin and render it once
    ///
    /// Returns the plugin's status after that first render. Mounting a second
    /// plugin under an existing name replaces the first.
    pub fn mount(&mut self, plugin: Box<dyn Plugin<C>>) -> PluginStatus {
        let name = plugin.name().to_string();
        if self.unmount(&name) {
            tracing::warn!(plugin = %name, "plugin mounted twice, replacing");
        }

        self.plugins.push(MountedPlugin {
            name: name.clone(),
            plugin,
            ctx: PluginContext::new(&self.registry),
            status: PluginStatus::Active,
        });
        tracing::debug!(plugin = %name, "plugin mounted");

        let index = self.plugins.len() - 1;
        render_contained(&mut self.plugins[index], self.reporter.as_mut());
        self.plugins[index].status.clone()
    }

    /// Unmount a plugin, withdrawing its fills and subscriptions
    pub fn unmount(&mut self, name: &str) -> bool {
        let Some(index) = self.plugins.iter().position(|p| p.name == name) else {
            return false;
        };
        let mut mounted = self.plugins.remove(index);
        mounted.ctx.teardown();
        tracing::debug!(plugin = %name, "plugin unmounted");
        true
    }

    /// Re-render every active plugin; returns how many failed in this pass
    pub fn render_all(&mut self) -> usize {
        let reporter = self.reporter.as_mut();
        self.plugins
            .iter_mut()
            .filter(|p| p.status == PluginStatus::Active)
            .map(|p| render_contained(p, &mut *reporter))
            .filter(|ok| !ok)
            .count()
    }

    /// Re-render one plugin; failed or unknown plugins are skipped
    pub fn render(&mut self, name: &str) -> Option<PluginStatus> {
        let reporter = self.reporter.as_mut();
        let mounted = self.plugins.iter_mut().find(|p| p.name == name)?;
        if mounted.status == PluginStatus::Active {
            render_contained(mounted, reporter);
        }
        Some(mounted.status.clone())
    }

    pub fn status(&self, name: &str) -> Option<&PluginStatus> {
        self.plugins
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.status)
    }

    /// Names of mounted plugins, in mount order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Render one plugin, containing any failure; returns whether it succeeded
fn render_contained<C>(mounted: &mut MountedPlugin<C>, reporter: &mut dyn ErrorReporter) -> bool {
    mounted.ctx.begin_render();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        mounted.plugin.render(&mut mounted.ctx)
    }));
    let error = match outcome {
        Ok(Ok(())) => {
            mounted.ctx.finish_render();
            return true;
        }
        Ok(Err(e)) => e,
        Err(payload) => PluginError::Panicked(panic_message(payload.as_ref())),
    };

    mounted.ctx.teardown();
    mounted.status = PluginStatus::Failed(error.to_string());

    let message = format!("Plugin <{}> failed to render: {}", mounted.name, error);
    tracing::warn!(plugin = %mounted.name, "plugin contained after failure");
    reporter.report(PluginReport {
        plugin: mounted.name.clone(),
        message,
    });
    false
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::Subscription;
    use crate::slot::{FillMeta, SlotOrder};
    use std::cell::Cell;

    struct Label {
        name: &'static str,
        slot: &'static str,
        renders: Rc<Cell<usize>>,
    }

    impl Plugin<&'static str> for Label {
        fn name(&self) -> &str {
            self.name
        }

        fn render(&mut self, ctx: &mut PluginContext<&'static str>) -> Result<(), PluginError> {
            self.renders.set(self.renders.get() + 1);
            ctx.fill("label", self.slot, self.name, FillMeta::new());
            Ok(())
        }
    }

    struct FailsOnSecondRender {
        renders: usize,
        cancelled: Rc<Cell<bool>>,
        panic: bool,
    }

    impl Plugin<&'static str> for FailsOnSecondRender {
        fn name(&self) -> &str {
            "flaky"
        }

        fn render(&mut self, ctx: &mut PluginContext<&'static str>) -> Result<(), PluginError> {
            self.renders += 1;
            if self.renders == 1 {
                let flag = Rc::clone(&self.cancelled);
                ctx.subscribe(Subscription::new("poll", move || flag.set(true)));
            }
            ctx.fill("label", "bar", "flaky", FillMeta::new());
            if self.renders > 1 {
                if self.panic {
                    panic!("exploded");
                }
                return Err(PluginError::render("boom"));
            }
            Ok(())
        }
    }

    fn label(name: &'static str, renders: &Rc<Cell<usize>>) -> Box<dyn Plugin<&'static str>> {
        Box::new(Label {
            name,
            slot: "bar",
            renders: Rc::clone(renders),
        })
    }

    #[test]
    fn test_mount_renders_once() {
        let registry = SlotRegistry::new();
        let mut loader = PluginLoader::new(&registry, CollectingReporter::new());
        let renders = Rc::new(Cell::new(0));

        assert_eq!(loader.mount(label("a", &renders)), PluginStatus::Active);
        assert_eq!(renders.get(), 1);
        assert_eq!(registry.query("bar", SlotOrder::Append).len(), 1);
    }

    #[test]
    fn test_failure_is_contained() {
        for panic in [false, true] {
            let registry = SlotRegistry::new();
            let reporter = CollectingReporter::new();
            let mut loader = PluginLoader::new(&registry, reporter.clone());
            let renders = Rc::new(Cell::new(0));
            let cancelled = Rc::new(Cell::new(false));

            loader.mount(label("before", &renders));
            loader.mount(Box::new(FailsOnSecondRender {
                renders: 0,
                cancelled: Rc::clone(&cancelled),
                panic,
            }));
            loader.mount(label("after", &renders));
            assert_eq!(registry.query("bar", SlotOrder::Append).len(), 3);

            assert_eq!(loader.render_all(), 1);

            let contents: Vec<_> = registry
                .query("bar", SlotOrder::Append)
                .into_iter()
                .map(|r| r.content)
                .collect();
            assert_eq!(contents, vec!["before", "after"]);
            assert!(cancelled.get());
            assert!(matches!(loader.status("flaky"), Some(PluginStatus::Failed(_))));

            // Failed plugin is not rendered again, so no second report
            loader.render_all();
            let reports = reporter.reports();
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].plugin, "flaky");
            assert!(reports[0].message.contains("flaky"));
            let expected = if panic { "exploded" } else { "boom" };
            assert!(reports[0].message.contains(expected));
        }
    }

    #[test]
    fn test_unmount_withdraws_fills() {
        let registry = SlotRegistry::new();
        let mut loader = PluginLoader::new(&registry, CollectingReporter::new());
        let renders = Rc::new(Cell::new(0));

        loader.mount(label("a", &renders));
        assert!(loader.unmount("a"));
        assert!(!loader.unmount("a"));
        assert!(registry.is_empty());
        assert!(loader.is_empty());
    }

    #[test]
    fn test_mount_same_name_replaces() {
        let registry = SlotRegistry::new();
        let mut loader = PluginLoader::new(&registry, CollectingReporter::new());
        let renders = Rc::new(Cell::new(0));

        loader.mount(label("a", &renders));
        loader.mount(label("a", &renders));
        assert_eq!(loader.names(), vec!["a"]);
        assert_eq!(registry.len(), 1);
    }
}
