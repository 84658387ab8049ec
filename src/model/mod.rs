//! Shell model - the complete state of the panel chrome
//!
//! One model per UI root. It owns the root's slot registry and pointer stream
//! and hands clones of them to every composer and plugin it creates.

use crate::config::{ConfigError, ShellConfig};
use crate::content::Content;
use crate::layout::{LayoutState, PanelComposer, PanelKind, PanelView, StatusBar, StatusBarView};
use crate::plugins::builtins::{
    LintResults, LintingTab, Log, LogLevel, LogTab, StatusItem, StatusText,
};
use crate::plugins::{ErrorReporter, PluginLoader};
use crate::resize::{PointerStream, Viewport};
use crate::slot::{names, SlotRegistry};

/// The three resizable panels
#[derive(Debug)]
pub struct Panels {
    pub bottom: PanelComposer<Content>,
    pub side: PanelComposer<Content>,
    pub variables: PanelComposer<Content>,
}

impl Panels {
    pub fn get(&self, kind: PanelKind) -> &PanelComposer<Content> {
        match kind {
            PanelKind::Bottom => &self.bottom,
            PanelKind::Side => &self.side,
            PanelKind::Variables => &self.variables,
        }
    }

    pub fn get_mut(&mut self, kind: PanelKind) -> &mut PanelComposer<Content> {
        match kind {
            PanelKind::Bottom => &mut self.bottom,
            PanelKind::Side => &mut self.side,
            PanelKind::Variables => &mut self.variables,
        }
    }

    /// The panel whose resizer is currently being dragged
    pub fn dragging(&self) -> Option<PanelKind> {
        PanelKind::ALL
            .into_iter()
            .find(|&kind| self.get(kind).is_dragging())
    }
}

/// Everything needed to draw the shell chrome
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub panels: Vec<PanelView<Content>>,
    pub status_bar: StatusBarView<Content>,
}

impl ShellView {
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelView<Content>> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

/// Shared state the built-in plugins render from
#[derive(Debug, Clone)]
pub struct BuiltinState {
    pub log: Log,
    pub lint: LintResults,
    pub engine: StatusText,
}

/// The complete shell model
pub struct ShellModel {
    pub config: ShellConfig,
    pub registry: SlotRegistry<Content>,
    pub pointer: PointerStream,
    /// Committed geometry of every panel (persisted by the host)
    pub layout: LayoutState,
    pub viewport: Viewport,
    pub panels: Panels,
    pub status_bar: StatusBar<Content>,
    pub plugins: PluginLoader<Content>,
    pub builtins: BuiltinState,
}

impl ShellModel {
    /// Build a model for one UI root
    ///
    /// Fails if a configured panel has unusable bounds.
    pub fn new(
        config: ShellConfig,
        layout: LayoutState,
        viewport: Viewport,
        reporter: impl ErrorReporter + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        layout.validate()?;

        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();

        let bounds = |kind: PanelKind| {
            let panel = match kind {
                PanelKind::Bottom => &config.panels.bottom,
                PanelKind::Side => &config.panels.side,
                PanelKind::Variables => &config.panels.variables,
            };
            panel.bounds().map_err(|source| ConfigError::Bounds {
                panel: kind.config_name(),
                source,
            })
        };
        let composer = |kind: PanelKind| -> Result<PanelComposer<Content>, ConfigError> {
            Ok(PanelComposer::new(kind, &registry, &pointer, bounds(kind)?))
        };
        let panels = Panels {
            bottom: composer(PanelKind::Bottom)?,
            side: composer(PanelKind::Side)?,
            variables: composer(PanelKind::Variables)?,
        };

        let builtins = BuiltinState {
            log: Log::new(config.log.max_entries),
            lint: LintResults::new(),
            engine: StatusText::default(),
        };

        Ok(Self {
            status_bar: StatusBar::new(&registry),
            plugins: PluginLoader::new(&registry, reporter),
            config,
            registry,
            pointer,
            layout,
            viewport,
            panels,
            builtins,
        })
    }

    /// Mount the plugins that ship with the shell
    pub fn mount_builtins(&mut self) {
        self.plugins.mount(Box::new(LogTab::new(&self.builtins.log)));
        self.plugins.mount(Box::new(LintingTab::new(&self.builtins.lint)));
        self.plugins.mount(Box::new(StatusItem::new(
            "engine-profile",
            names::STATUS_BAR_APP,
            &self.builtins.engine,
        )));
        self.builtins.log.push(LogLevel::Info, "Built-in plugins mounted");
        self.plugins.render("log");
    }

    /// Whether any composer has unseen fill changes
    pub fn needs_render(&self) -> bool {
        PanelKind::ALL
            .into_iter()
            .any(|kind| self.panels.get(kind).needs_render())
            || self.status_bar.needs_render()
    }

    /// Compose the whole chrome for drawing
    pub fn render(&mut self) -> ShellView {
        let panels = PanelKind::ALL
            .into_iter()
            .map(|kind| self.panels.get_mut(kind).render(&self.layout, self.viewport))
            .collect();
        ShellView {
            panels,
            status_bar: self.status_bar.render(),
        }
    }
}

impl std::fmt::Debug for ShellModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellModel")
            .field("layout", &self.layout)
            .field("viewport", &self.viewport)
            .field("registry", &self.registry)
            .field("plugins", &self.plugins.names())
            .finish()
    }
}
