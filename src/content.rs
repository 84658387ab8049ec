//! Renderable payload carried by the shell's fills
//!
//! The registry treats content as opaque; the shell uses this small tree so
//! that a headless host (and the tests) can render panels as text.

/// Content published by a fill
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Single line of text
    Text(String),
    /// Multiple lines (log output, report lists)
    Lines(Vec<String>),
    /// Clickable item dispatching an action id
    Button { label: String, action: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Content::Button {
            label: label.into(),
            action: action.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Text(s) => s.is_empty(),
            Content::Lines(lines) => lines.is_empty(),
            Content::Button { .. } => false,
        }
    }

    /// Plain-text rendering, one entry per line
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Content::Empty => Vec::new(),
            Content::Text(s) => vec![s.clone()],
            Content::Lines(lines) => lines.clone(),
            Content::Button { label, .. } => vec![format!("[{}]", label)],
        }
    }
}
