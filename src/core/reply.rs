//! Platform-neutral reply payloads
//!
//! Handlers build these plain values; `ui::render` turns them into serenity
//! builders at send time.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;
/// Buttons per action row
pub const ROW_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// A clickable button carrying a routable custom id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub custom_id: String,
    pub label: String,
    pub style: ControlStyle,
}

/// Embed-style informational panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub panel: Option<Panel>,
    pub controls: Vec<Control>,
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(truncate(&content.into(), MESSAGE_LIMIT)),
            ..Self::default()
        }
    }

    pub fn panel(panel: Panel) -> Self {
        Self {
            panel: Some(Panel {
                description: truncate(&panel.description, EMBED_LIMIT),
                ..panel
            }),
            ..Self::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn with_controls(mut self, controls: Vec<Control>) -> Self {
        self.controls = controls;
        self
    }

    /// Controls grouped into action rows of at most [`ROW_WIDTH`]
    pub fn control_rows(&self) -> impl Iterator<Item = &[Control]> {
        self.controls.chunks(ROW_WIDTH)
    }

    /// Every custom id carried by this reply
    pub fn custom_ids(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.custom_id.as_str()).collect()
    }

    /// All visible text (content, panel title and description), for logging and tests
    pub fn visible_text(&self) -> String {
        let mut text = self.content.clone().unwrap_or_default();
        if let Some(panel) = &self.panel {
            text.push('\n');
            text.push_str(&panel.title);
            text.push('\n');
            text.push_str(&panel.description);
        }
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Short,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalField {
    pub custom_id: String,
    pub label: String,
    pub style: FieldStyle,
    pub placeholder: Option<String>,
    pub required: bool,
    pub max_length: u64,
}

/// A form presented as the initial response to an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub custom_id: String,
    pub title: String,
    pub fields: Vec<ModalField>,
}

/// Truncate to `limit` bytes on a char boundary, adding an ellipsis when cut
pub fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit.saturating_sub(3);
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
