use super::DirectoryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Copy,
    OpenStream,
    OpenInBrowser,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Copy,
        ActionKind::OpenStream,
        ActionKind::OpenInBrowser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Copy => "Copy",
            ActionKind::OpenStream => "Open",
            ActionKind::OpenInBrowser => "Browser",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            ActionKind::Copy => "fa-copy",
            ActionKind::OpenStream => "fa-external-link-alt",
            ActionKind::OpenInBrowser => "fa-globe",
        }
    }
}

/// A control bound to one channel's stream url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAction {
    pub kind: ActionKind,
    pub url: String,
}

/// What the browser has to do to carry out an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard(String),
    Open { url: String, target: String },
}

impl ChannelAction {
    pub fn effect(&self, config: &DirectoryConfig) -> Effect {
        match self.kind {
            ActionKind::Copy => Effect::WriteClipboard(self.url.clone()),
            ActionKind::OpenStream => Effect::Open {
                url: format!("{}{}", config.stream_scheme, self.url),
                target: config.link_target.clone(),
            },
            ActionKind::OpenInBrowser => Effect::Open {
                url: self.url.clone(),
                target: config.link_target.clone(),
            },
        }
    }
}
