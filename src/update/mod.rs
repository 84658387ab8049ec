//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod layout;
mod pointer;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::{Msg, PointerMsg};
use crate::model::ShellModel;

pub use app::update_app;
pub use layout::update_layout;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at pointer rate; keep them out of the debug log
    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move(_)));
    let _span = if is_noisy {
        None
    } else {
        let msg_name = msg_type_name(&msg);
        debug!(target: "message", msg = %msg_name, "processing");
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    match msg {
        Msg::Layout(m) => update_layout(model, m),
        Msg::Pointer(m) => update_pointer(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
