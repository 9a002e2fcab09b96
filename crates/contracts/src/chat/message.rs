use serde::{Deserialize, Serialize};

/// Role of a message author within the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation.
///
/// Messages are append-only: once created they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    /// Plain text for user turns; may be markdown for assistant turns.
    pub content: String,
    /// Optional tabular payload, expected to be an array of uniform objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Milliseconds since epoch, captured at creation. Ordering/keying only,
    /// never displayed.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            data: None,
            timestamp,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        data: Option<serde_json::Value>,
        timestamp: i64,
    ) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            data,
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        assert_eq!(ChatRole::from_str("user").unwrap(), ChatRole::User);
        assert_eq!(ChatRole::from_str("assistant").unwrap(), ChatRole::Assistant);
        assert!(ChatRole::from_str("system").is_err());
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn user_message_has_no_data() {
        let msg = ChatMessage::user("hello", 1000);
        assert!(msg.is_user());
        assert_eq!(msg.content, "hello");
        assert!(msg.data.is_none());
        assert_eq!(msg.timestamp, 1000);
    }

    #[test]
    fn data_field_is_skipped_when_absent() {
        let msg = ChatMessage::user("hi", 1);
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["role"], "user");
    }
}
