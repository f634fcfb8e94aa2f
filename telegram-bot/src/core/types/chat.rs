//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (group or private) identity. `chat_type` is `private`, `group`, `supergroup` or `channel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }

    pub fn group(id: i64) -> Self {
        Self {
            id,
            chat_type: "group".to_string(),
        }
    }

    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }
}
