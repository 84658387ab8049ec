//! App-level handlers (viewport, plugin re-render, fill actions)

use crate::commands::Cmd;
use crate::layout::PanelKind;
use crate::messages::AppMsg;
use crate::model::ShellModel;
use crate::plugins::builtins::{CLEAR_LOG_ACTION, LINTING_TAB, TOGGLE_LINTING_ACTION};
use crate::resize::Viewport;

pub fn update_app(model: &mut ShellModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ViewportResized { width, height } => {
            // Percentage sizes resolve on the next render
            model.viewport = Viewport::new(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::RenderPlugins => {
            let failed = model.plugins.render_all();
            if failed > 0 {
                tracing::warn!(failed, "plugins contained during render");
            }
            model.needs_render().then_some(Cmd::Redraw)
        }

        AppMsg::Action(action) => match action.as_str() {
            CLEAR_LOG_ACTION => {
                model.builtins.log.clear();
                model.plugins.render("log");
                Some(Cmd::Redraw)
            }
            TOGGLE_LINTING_ACTION => {
                let viewport = model.viewport;
                let panel = model.panels.get_mut(PanelKind::Bottom);
                let active = panel.active_tab(&model.layout);
                if model.layout.panel.open && active.as_deref() == Some(LINTING_TAB) {
                    panel.cancel();
                    panel.toggle(&mut model.layout, viewport);
                } else {
                    panel.select_tab(&mut model.layout, LINTING_TAB, viewport);
                }
                Some(Cmd::commit(&model.layout))
            }
            _ => {
                tracing::debug!(%action, "unhandled action");
                None
            }
        },
    }
}
