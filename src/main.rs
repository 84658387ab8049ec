//! Headless inspector for the modeler shell
//!
//! Loads the configured layout, mounts the built-in plugins, replays any
//! scripted drags or toggles, and prints the composed chrome as text.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use modeler_shell::cli::{CliArgs, DragRequest, StartupConfig};
use modeler_shell::commands::Cmd;
use modeler_shell::config::ShellConfig;
use modeler_shell::layout::LayoutState;
use modeler_shell::messages::{AppMsg, LayoutMsg, Msg, PointerMsg};
use modeler_shell::model::{ShellModel, ShellView};
use modeler_shell::plugins::TracingReporter;
use modeler_shell::resize::{PointerPosition, Viewport};
use modeler_shell::update::update;

/// Host side of the update loop: performs the commands an update returns
struct Host {
    model: ShellModel,
    layout_path: Option<PathBuf>,
    /// Latest committed layout not yet written
    pending_layout: Option<LayoutState>,
    redraws: usize,
}

impl Host {
    fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.perform(cmd);
        }
    }

    fn perform(&mut self, cmd: Cmd) {
        if let Some(layout) = cmd.layout_to_persist() {
            self.pending_layout = Some(layout.clone());
        }
        if cmd.needs_redraw() {
            self.redraws += 1;
        }
    }

    fn save_layout(&self) -> Result<()> {
        let Some(path) = &self.layout_path else {
            return Err(anyhow!("no layout file available"));
        };
        let layout = self.pending_layout.as_ref().unwrap_or(&self.model.layout);
        layout
            .save(path)
            .with_context(|| format!("saving layout to {}", path.display()))
    }
}

/// Replay a drag on a panel's resizer as press, move, release
fn replay_drag(host: &mut Host, drag: &DragRequest) {
    let direction = drag.panel.direction();
    let origin = PointerPosition::new(400.0, 400.0);
    let midway = direction.offset(origin, drag.delta / 2.0);
    let target = direction.offset(origin, drag.delta);

    host.dispatch(Msg::Pointer(PointerMsg::PressResizer {
        panel: drag.panel,
        at: origin,
        measured: None,
    }));
    host.dispatch(Msg::Pointer(PointerMsg::Move(midway)));
    host.dispatch(Msg::Pointer(PointerMsg::Move(target)));
    host.dispatch(Msg::Pointer(PointerMsg::Release(target)));
}

fn print_view(view: &ShellView) {
    for panel in &view.panels {
        let state = if panel.open { "open" } else { "closed" };
        println!(
            "{} [{} {:.0}px]",
            panel.kind.display_name(),
            state,
            panel.size
        );
        for tab in &panel.tabs {
            let marker = if tab.active { '*' } else { ' ' };
            println!("  {} {} ({})", marker, tab.label, tab.key);
        }
        for item in &panel.header {
            println!("  header: {}", item.render_lines().join(" "));
        }
        if panel.open {
            if let Some(content) = &panel.content {
                for line in content.render_lines() {
                    println!("    {}", line);
                }
            }
        }
    }

    let items = |region: &[modeler_shell::Content]| {
        region
            .iter()
            .flat_map(|c| c.render_lines())
            .collect::<Vec<_>>()
            .join(" | ")
    };
    println!(
        "Status bar: {} || {}",
        items(&view.status_bar.file),
        items(&view.status_bar.app)
    );
}

fn load(startup: &StartupConfig) -> Result<(ShellConfig, LayoutState, Option<PathBuf>)> {
    let config = match &startup.config_path {
        Some(path) => ShellConfig::load_from(path),
        None => ShellConfig::load(),
    }
    .context("loading config")?;

    let layout_path = startup
        .layout_path
        .clone()
        .or_else(modeler_shell::config_paths::layout_file);
    let layout = match &layout_path {
        Some(path) => LayoutState::load(path).context("loading layout")?,
        None => None,
    }
    .unwrap_or_else(|| LayoutState::from_config(&config));

    Ok((config, layout, layout_path))
}

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow!(e))?;

    modeler_shell::tracing::init();

    let (config, layout, layout_path) = load(&startup)?;
    let (width, height) = startup.viewport;
    let model = ShellModel::new(
        config,
        layout,
        Viewport::new(width, height),
        TracingReporter,
    )
    .context("building shell")?;

    let mut host = Host {
        model,
        layout_path,
        pending_layout: None,
        redraws: 0,
    };
    host.model.mount_builtins();
    host.dispatch(Msg::App(AppMsg::RenderPlugins));

    if let Some(panel) = startup.toggle {
        host.dispatch(Msg::Layout(LayoutMsg::TogglePanel(panel)));
    }
    if let Some(drag) = &startup.drag {
        replay_drag(&mut host, drag);
    }

    let view = host.model.render();
    print_view(&view);
    tracing::debug!(redraws = host.redraws, "inspection finished");

    if startup.save {
        host.save_layout()?;
        if let Some(path) = &host.layout_path {
            println!("Saved layout to {}", path.display());
        }
    }
    Ok(())
}
