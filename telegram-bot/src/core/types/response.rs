//! Handler chain result and reply payload types.

/// One button of an inline keyboard: the visible label and the data sent back when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// What the bot sends back for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message.
    Text(String),
    /// PNG image with an optional caption.
    Photo {
        png: Vec<u8>,
        caption: Option<String>,
    },
    /// Text with an inline keyboard under it, one `Vec` per row.
    Keyboard {
        text: String,
        rows: Vec<Vec<InlineButton>>,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Text(_) => "text",
            Reply::Photo { .. } => "photo",
            Reply::Keyboard { .. } => "keyboard",
        }
    }

    /// Text length for text and keyboard replies, byte size for photos.
    pub fn len(&self) -> usize {
        match self {
            Reply::Text(t) | Reply::Keyboard { text: t, .. } => t.len(),
            Reply::Photo { png, .. } => png.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handler result for the chain. `Reply` carries what was sent so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Stop the chain; the reply has been delivered.
    Reply(Reply),
}
