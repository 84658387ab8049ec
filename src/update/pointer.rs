//! Pointer handlers for resizer drags
//!
//! Moves and releases are window-wide: they reach the dragging panel only
//! while its drag session holds the pointer stream.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::ShellModel;

pub fn update_pointer(model: &mut ShellModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::PressResizer {
            panel,
            at,
            measured,
        } => {
            // Only one gesture at a time across all panels
            if let Some(other) = model.panels.dragging() {
                model.panels.get_mut(other).cancel();
            }
            model
                .panels
                .get_mut(panel)
                .press(at, &model.layout, measured, model.viewport);
            None
        }

        PointerMsg::Move(at) => {
            if !model.pointer.is_captured() {
                return None;
            }
            let panel = model.panels.dragging()?;
            model
                .panels
                .get_mut(panel)
                .pointer_move(at, model.viewport)
                .map(|_| Cmd::Redraw)
        }

        PointerMsg::Release(at) => {
            if !model.pointer.is_captured() {
                return None;
            }
            let panel = model.panels.dragging()?;
            model
                .panels
                .get_mut(panel)
                .release(at, &mut model.layout, model.viewport)?;
            Some(Cmd::commit(&model.layout))
        }

        PointerMsg::Cancel => {
            let panel = model.panels.dragging()?;
            model.panels.get_mut(panel).cancel();
            Some(Cmd::Redraw)
        }
    }
}
