//! Layout message handlers (panel visibility, tabs, external geometry)

use crate::commands::Cmd;
use crate::layout::LayoutState;
use crate::messages::LayoutMsg;
use crate::model::ShellModel;

/// Handle layout messages
pub fn update_layout(model: &mut ShellModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::TogglePanel(kind) => {
            // A toggle mid-drag would be overwritten by the release
            model.panels.get_mut(kind).cancel();
            model
                .panels
                .get(kind)
                .toggle(&mut model.layout, model.viewport);
            Some(Cmd::commit(&model.layout))
        }

        LayoutMsg::SelectTab { panel, key } => {
            let viewport = model.viewport;
            if model
                .panels
                .get_mut(panel)
                .select_tab(&mut model.layout, &key, viewport)
            {
                Some(Cmd::commit(&model.layout))
            } else {
                tracing::debug!(?panel, %key, "ignoring unknown tab");
                None
            }
        }

        LayoutMsg::SetGeometry { panel, geometry } => {
            match model.layout.try_set_geometry(panel, geometry) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!(?panel, "rejected panel geometry: {}", e);
                    None
                }
            }
        }

        LayoutMsg::ResetLayout => {
            for kind in crate::layout::PanelKind::ALL {
                model.panels.get_mut(kind).cancel();
            }
            model.layout = LayoutState::from_config(&model.config);
            Some(Cmd::commit(&model.layout))
        }
    }
}
