//! Analyst Chat - View Model

use contracts::chat::ChatSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    /// Conversation state; all transitions go through `ChatSession`.
    pub session: RwSignal<ChatSession>,
    /// Pending input bound to the text field, cleared on submission.
    pub input: RwSignal<String>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
        }
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}
