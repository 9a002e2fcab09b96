//! Client-side conversation state.
//!
//! The session is an explicit value with pure transitions: `submit` appends
//! the user turn and yields the request to send, `settle` appends the
//! assistant turn (or the fallback) and returns the session to idle. The UI
//! layer only stores a `ChatSession` in a signal and performs the actual
//! HTTP call between the two transitions, so every conversation rule here is
//! testable without a rendering environment.

use super::api::{ChatRequest, ChatResponse};
use super::message::ChatMessage;

/// Fixed assistant reply shown when a request fails for any reason.
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error. Please try again.";

/// How a dispatched request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Answer(ChatResponse),
    /// Network error, non-2xx status, malformed body or timeout. The UI does
    /// not distinguish between these.
    Failed,
}

/// State owned by the chat view for the lifetime of the page.
///
/// The message list is append-only and grows by exactly two entries per
/// completed submission (one user, one assistant). While a request is in
/// flight (`awaiting_response`) further submissions are rejected, so at most
/// one request is ever outstanding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    /// Opaque server-side conversation token. Never cleared once set.
    pub thread_id: Option<String>,
    pub awaiting_response: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission with the given input would be accepted.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.awaiting_response && !input.trim().is_empty()
    }

    /// Appends the user message and returns the request to dispatch.
    ///
    /// Returns `None` (and leaves the session untouched) when the trimmed
    /// input is empty or a request is already in flight. The raw input is
    /// kept verbatim in the message; trimming only gates acceptance.
    pub fn submit(&mut self, input: &str, now_ms: i64) -> Option<ChatRequest> {
        if !self.can_submit(input) {
            return None;
        }
        self.messages.push(ChatMessage::user(input, now_ms));
        self.awaiting_response = true;
        Some(ChatRequest {
            message: input.to_string(),
            thread_id: self.thread_id.clone(),
        })
    }

    /// Applies the settled outcome of the in-flight request.
    ///
    /// A successful response may refresh the thread id; a failure leaves it
    /// unchanged and appends the fixed fallback answer instead. Either way
    /// the session returns to idle.
    pub fn settle(&mut self, outcome: ChatOutcome, now_ms: i64) {
        match outcome {
            ChatOutcome::Answer(response) => {
                if let Some(thread_id) = response.thread_id {
                    self.thread_id = Some(thread_id);
                }
                self.messages
                    .push(ChatMessage::assistant(response.answer, response.data, now_ms));
            }
            ChatOutcome::Failed => {
                self.messages
                    .push(ChatMessage::assistant(FALLBACK_ANSWER, None, now_ms));
            }
        }
        self.awaiting_response = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::ChatRole;
    use crate::chat::row_set::RowSet;
    use serde_json::json;

    fn answer(text: &str, data: Option<serde_json::Value>, thread: Option<&str>) -> ChatOutcome {
        ChatOutcome::Answer(ChatResponse {
            answer: text.to_string(),
            data,
            thread_id: thread.map(String::from),
        })
    }

    #[test]
    fn completed_submissions_grow_list_by_two() {
        let mut session = ChatSession::new();
        for i in 0..3 {
            let now = 1000 + i;
            session.submit("question", now).expect("accepted");
            session.settle(answer("reply", None, None), now + 1);
        }
        assert_eq!(session.messages.len(), 6);
        for pair in session.messages.chunks(2) {
            assert_eq!(pair[0].role, ChatRole::User);
            assert_eq!(pair[1].role, ChatRole::Assistant);
        }
        assert!(!session.awaiting_response);
    }

    #[test]
    fn empty_or_whitespace_input_is_rejected() {
        let mut session = ChatSession::new();
        assert!(session.submit("", 1).is_none());
        assert!(session.submit("   \n\t", 2).is_none());
        assert!(session.messages.is_empty());
        assert!(!session.awaiting_response);
    }

    #[test]
    fn submit_while_awaiting_is_a_no_op() {
        let mut session = ChatSession::new();
        assert!(session.submit("first", 1).is_some());
        assert!(session.submit("second", 2).is_none());
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].content, "first");
    }

    #[test]
    fn raw_input_is_kept_verbatim() {
        let mut session = ChatSession::new();
        session.submit("  padded question  ", 1).unwrap();
        assert_eq!(session.messages[0].content, "  padded question  ");
    }

    #[test]
    fn first_request_carries_null_thread_id() {
        let mut session = ChatSession::new();
        let request = session.submit("hello", 1).unwrap();
        assert_eq!(request.thread_id, None);
    }

    #[test]
    fn thread_id_from_response_is_attached_to_next_request() {
        let mut session = ChatSession::new();
        session.submit("hello", 1).unwrap();
        session.settle(answer("hi", None, Some("abc")), 2);

        let request = session.submit("more", 3).unwrap();
        assert_eq!(request.thread_id.as_deref(), Some("abc"));
    }

    #[test]
    fn failure_leaves_thread_id_unchanged() {
        let mut session = ChatSession::new();
        session.submit("a", 1).unwrap();
        session.settle(answer("ok", None, Some("t9")), 2);

        session.submit("b", 3).unwrap();
        session.settle(ChatOutcome::Failed, 4);

        assert_eq!(session.thread_id.as_deref(), Some("t9"));
        assert_eq!(session.messages.last().unwrap().content, FALLBACK_ANSWER);
        assert!(!session.awaiting_response);
    }

    #[test]
    fn show_me_all_tables_scenario() {
        let mut session = ChatSession::new();
        let request = session.submit("Show me all tables", 1).unwrap();
        assert_eq!(request.message, "Show me all tables");
        assert_eq!(request.thread_id, None);

        session.settle(
            answer(
                "Here are the tables:",
                Some(json!([{"table_name": "orders"}])),
                Some("t1"),
            ),
            2,
        );

        assert_eq!(session.messages.len(), 2);
        let reply = &session.messages[1];
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.content, "Here are the tables:");
        let rs = RowSet::from_json(reply.data.as_ref().unwrap()).unwrap();
        assert_eq!(rs.columns, vec!["table_name"]);
        assert_eq!(rs.row_count(), 1);
        assert!(!session.awaiting_response);

        let next = session.submit("and row counts?", 3).unwrap();
        assert_eq!(next.thread_id.as_deref(), Some("t1"));
    }

    #[test]
    fn timestamps_follow_submission_order() {
        let mut session = ChatSession::new();
        session.submit("a", 10).unwrap();
        session.settle(answer("b", None, None), 20);
        session.submit("c", 30).unwrap();
        session.settle(ChatOutcome::Failed, 40);
        let stamps: Vec<i64> = session.messages.iter().map(|m| m.timestamp).collect();
        assert_eq!(stamps, vec![10, 20, 30, 40]);
    }
}
