//! Modeler Shell - panel chrome for a modeling application
//!
//! This crate provides the headless core of an application shell: a slot-fill
//! registry that decouples content producers from layout, resizable panels
//! driven by pointer drags, and a plugin loader that contains failures. State
//! changes follow the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod content;
pub mod layout;
pub mod messages;
pub mod model;
pub mod plugins;
pub mod resize;
pub mod slot;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use content::Content;
pub use messages::Msg;
pub use model::ShellModel;
