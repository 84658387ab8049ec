//! Panel composer - tabs from a slot, geometry from a resizable container
//!
//! A composer knows which slots feed its panel and where in the layout object
//! its geometry lives. It knows nothing about the tabs it renders.

use crate::resize::{
    Geometry, PointerPosition, PointerStream, Preview, ResizableContainer, ResizeBounds, Viewport,
};
use crate::slot::{FillId, Registration, Slot, SlotOrder, SlotRegistry};

use super::state::{LayoutState, PanelKind};

/// Prop a header fill uses to bind itself to one tab
pub const TAB_PROP: &str = "tab";

/// Tab header as rendered in the panel's tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub fill: FillId,
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Everything needed to draw one panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<C> {
    pub kind: PanelKind,
    pub open: bool,
    /// Size along the resize axis, in pixels
    pub size: f64,
    pub dragging: bool,
    pub tabs: Vec<TabView>,
    /// Content of the active tab
    pub content: Option<C>,
    /// Header fills (tab actions or navigation) visible for the active tab
    pub header: Vec<C>,
}

/// Binds a panel's slots to its resizable container
#[derive(Debug)]
pub struct PanelComposer<C> {
    kind: PanelKind,
    tabs: Slot<C>,
    header: Option<Slot<C>>,
    container: ResizableContainer,
}

/// Tab key of a fill: its `id` prop, falling back to the fill id
fn tab_key<C>(fill: &Registration<C>) -> String {
    fill.meta
        .key()
        .map(str::to_string)
        .unwrap_or_else(|| fill.id.to_string())
}

impl<C> PanelComposer<C> {
    pub fn new(
        kind: PanelKind,
        registry: &SlotRegistry<C>,
        pointer: &PointerStream,
        bounds: ResizeBounds,
    ) -> Self {
        Self {
            kind,
            tabs: Slot::new(registry, kind.tabs_slot(), SlotOrder::Priority),
            header: kind
                .header_slot()
                .map(|name| Slot::new(registry, name, SlotOrder::Append)),
            container: ResizableContainer::new(kind.direction(), bounds, pointer),
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn container(&self) -> &ResizableContainer {
        &self.container
    }

    pub fn is_dragging(&self) -> bool {
        self.container.is_dragging()
    }

    /// Whether tabs or header fills changed since the last render
    pub fn needs_render(&self) -> bool {
        self.tabs.poll_changed() || self.header.as_ref().is_some_and(|h| h.poll_changed())
    }

    /// Keys of the current tabs, highest priority first
    pub fn tab_keys(&mut self) -> Vec<String> {
        self.tabs.map(tab_key)
    }

    /// Active tab: the remembered one if it still exists, else the first tab
    pub fn active_tab(&mut self, layout: &LayoutState) -> Option<String> {
        let keys = self.tab_keys();
        let remembered = layout.slice(self.kind).tab.as_ref();
        match remembered {
            Some(tab) if keys.contains(tab) => Some(tab.clone()),
            _ => keys.into_iter().next(),
        }
    }

    /// Activate a tab and open the panel; unknown keys are ignored
    ///
    /// A closed panel opens the way a toggle does, so a size below the
    /// minimum snaps up to it.
    pub fn select_tab(
        &mut self,
        layout: &mut LayoutState,
        key: &str,
        viewport: Viewport,
    ) -> bool {
        if !self.tab_keys().iter().any(|k| k == key) {
            return false;
        }
        if !layout.slice(self.kind).open {
            self.cancel();
            self.toggle(layout, viewport);
        }
        layout.slice_mut(self.kind).tab = Some(key.to_string());
        true
    }

    /// Press on the resizer
    pub fn press(
        &mut self,
        at: PointerPosition,
        layout: &LayoutState,
        measured: Option<f64>,
        viewport: Viewport,
    ) {
        self.container
            .press(at, &layout.geometry(self.kind), measured, viewport);
    }

    pub fn pointer_move(&mut self, at: PointerPosition, viewport: Viewport) -> Option<Preview> {
        self.container.pointer_move(at, viewport)
    }

    /// Release ends the drag and commits into this panel's layout slice
    ///
    /// Returns the committed geometry, or `None` when no drag was active.
    pub fn release(
        &mut self,
        at: PointerPosition,
        layout: &mut LayoutState,
        viewport: Viewport,
    ) -> Option<Geometry> {
        let committed = layout.geometry(self.kind);
        let geometry = self.container.release(at, &committed, viewport)?;
        layout.set_geometry(self.kind, geometry);
        Some(geometry)
    }

    pub fn cancel(&mut self) {
        self.container.cancel();
    }

    /// Toggle open/closed outside of a drag (menu, keybinding)
    pub fn toggle(&self, layout: &mut LayoutState, viewport: Viewport) -> Geometry {
        let geometry = self.container.toggle(&layout.geometry(self.kind), viewport);
        layout.set_geometry(self.kind, geometry);
        geometry
    }
}

impl<C: Clone> PanelComposer<C> {
    /// Compose the panel for drawing
    pub fn render(&mut self, layout: &LayoutState, viewport: Viewport) -> PanelView<C> {
        let committed = layout.geometry(self.kind);
        let active = self.active_tab(layout);

        let mut content = None;
        let tabs = self.tabs.map(|fill| {
            let key = tab_key(fill);
            let is_active = active.as_deref() == Some(key.as_str());
            if is_active {
                content = Some(fill.content.clone());
            }
            TabView {
                fill: fill.id,
                label: fill.meta.label.clone().unwrap_or_else(|| key.clone()),
                key,
                active: is_active,
            }
        });

        let header = match self.header.as_mut() {
            Some(slot) => slot
                .items()
                .into_iter()
                .filter(|fill| match fill.meta.prop_str(TAB_PROP) {
                    Some(tab) => active.as_deref() == Some(tab),
                    None => true,
                })
                .map(|fill| fill.content)
                .collect(),
            None => Vec::new(),
        };

        PanelView {
            kind: self.kind,
            open: self.container.rendered_open(&committed),
            size: self.container.rendered_size(&committed, viewport),
            dragging: self.container.is_dragging(),
            tabs,
            content,
            header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resize::{SizeSpec, COLLAPSED_SIZE};
    use crate::slot::{names, Fill, FillMeta};

    const VIEWPORT: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    fn composer(
        registry: &SlotRegistry<&'static str>,
        pointer: &PointerStream,
    ) -> PanelComposer<&'static str> {
        let bounds = ResizeBounds::new(SizeSpec::Pixels(130.0), None).unwrap();
        PanelComposer::new(PanelKind::Bottom, registry, pointer, bounds)
    }

    fn tab(registry: &SlotRegistry<&'static str>, key: &str, priority: i32) -> Fill<&'static str> {
        let mut fill = Fill::new(registry, names::BOTTOM_PANEL);
        fill.render(
            "content",
            FillMeta::new()
                .with_key(key)
                .with_label(key.to_uppercase())
                .with_priority(priority),
        );
        fill
    }

    #[test]
    fn test_tabs_ordered_by_priority() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);

        let _log = tab(&registry, "log", 1);
        let _linting = tab(&registry, "linting", 2);

        assert_eq!(panel.tab_keys(), vec!["linting", "log"]);
    }

    #[test]
    fn test_active_tab_falls_back_when_removed() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let mut layout = LayoutState::default();

        let _log = tab(&registry, "log", 1);
        let linting = tab(&registry, "linting", 2);

        assert!(panel.select_tab(&mut layout, "log", VIEWPORT));
        assert!(layout.panel.open);
        assert_eq!(panel.active_tab(&layout), Some("log".to_string()));

        assert!(panel.select_tab(&mut layout, "linting", VIEWPORT));
        drop(linting);
        assert_eq!(panel.active_tab(&layout), Some("log".to_string()));

        assert!(!panel.select_tab(&mut layout, "missing", VIEWPORT));
    }

    #[test]
    fn test_select_tab_on_closed_panel_snaps_to_min() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let mut layout = LayoutState::default();
        layout.set_geometry(
            PanelKind::Bottom,
            Geometry::new(false, SizeSpec::Pixels(40.0)),
        );

        let _log = tab(&registry, "log", 1);
        panel.press(PointerPosition::new(0.0, 700.0), &layout, None, VIEWPORT);
        assert!(panel.select_tab(&mut layout, "log", VIEWPORT));

        assert_eq!(
            layout.geometry(PanelKind::Bottom),
            Geometry::new(true, SizeSpec::Pixels(130.0))
        );
        assert!(!panel.is_dragging());
        assert!(!pointer.is_captured());
    }

    #[test]
    fn test_release_commits_into_own_slice() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let mut layout = LayoutState::default();
        layout.panel.open = true;
        layout.panel.size = SizeSpec::Pixels(300.0);
        let side_before = layout.side_panel.clone();

        // Top edge: dragging up grows the panel
        panel.press(PointerPosition::new(0.0, 500.0), &layout, None, VIEWPORT);
        panel.pointer_move(PointerPosition::new(0.0, 450.0), VIEWPORT);
        let committed = panel.release(PointerPosition::new(0.0, 400.0), &mut layout, VIEWPORT);

        assert_eq!(committed, Some(Geometry::new(true, SizeSpec::Pixels(400.0))));
        assert_eq!(layout.panel.size, SizeSpec::Pixels(400.0));
        assert_eq!(layout.side_panel, side_before);
    }

    #[test]
    fn test_render_closed_panel() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let layout = LayoutState::default();
        let _log = tab(&registry, "log", 1);

        let view = panel.render(&layout, VIEWPORT);
        assert!(!view.open);
        assert_eq!(view.size, COLLAPSED_SIZE);
        assert_eq!(view.tabs.len(), 1);
        assert!(view.tabs[0].active);
        assert_eq!(view.tabs[0].label, "LOG");
        assert_eq!(view.content, Some("content"));
    }

    #[test]
    fn test_header_filtered_to_active_tab() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let mut layout = LayoutState::default();

        let _log = tab(&registry, "log", 1);
        let _linting = tab(&registry, "linting", 2);

        let mut clear_log = Fill::new(&registry, names::TAB_ACTIONS);
        clear_log.render(
            "clear-log",
            FillMeta::new().with_prop(TAB_PROP, serde_json::json!("log")),
        );
        let mut always = Fill::new(&registry, names::TAB_ACTIONS);
        always.render("close", FillMeta::new());

        let view = panel.render(&layout, VIEWPORT);
        assert_eq!(view.header, vec!["close"]);

        panel.select_tab(&mut layout, "log", VIEWPORT);
        let view = panel.render(&layout, VIEWPORT);
        assert_eq!(view.header, vec!["clear-log", "close"]);
    }

    #[test]
    fn test_needs_render_after_fill_changes() {
        let registry = SlotRegistry::new();
        let pointer = PointerStream::new();
        let mut panel = composer(&registry, &pointer);
        let layout = LayoutState::default();

        panel.render(&layout, VIEWPORT);
        assert!(!panel.needs_render());

        let _log = tab(&registry, "log", 1);
        assert!(panel.needs_render());
    }
}
