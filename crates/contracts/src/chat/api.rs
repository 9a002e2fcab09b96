use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
///
/// `thread_id` is serialized as an explicit `null` until the backend has
/// assigned one; afterwards every request carries the latest token so the
/// server can keep conversation continuity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub thread_id: Option<String>,
}

/// Response body from the analyst backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    /// Raw JSON row set for tabular results, when the answer has one.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_null_thread_id() {
        let req = ChatRequest {
            message: "Show me all tables".into(),
            thread_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"message": "Show me all tables", "thread_id": null})
        );
    }

    #[test]
    fn request_carries_thread_id_once_set() {
        let req = ChatRequest {
            message: "and the row counts?".into(),
            thread_id: Some("t1".into()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["thread_id"], "t1");
    }

    #[test]
    fn response_tolerates_missing_optional_fields() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(resp.answer, "42");
        assert!(resp.data.is_none());
        assert!(resp.thread_id.is_none());
    }

    #[test]
    fn response_parses_full_body() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "answer": "Here are the tables:",
            "data": [{"table_name": "orders"}],
            "thread_id": "t1"
        }))
        .unwrap();
        assert_eq!(resp.answer, "Here are the tables:");
        assert!(resp.data.is_some());
        assert_eq!(resp.thread_id.as_deref(), Some("t1"));
    }
}
