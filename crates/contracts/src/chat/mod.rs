//! Chat contracts shared between the analyst frontend and its backend.
//!
//! Structure:
//! - message.rs: ChatRole and ChatMessage (one conversational turn)
//! - api.rs: request/response DTOs for POST /api/chat
//! - row_set.rs: tabular payload model with explicit column inference
//! - session.rs: client session state with pure submit/settle transitions

pub mod api;
pub mod message;
pub mod row_set;
pub mod session;

pub use api::{ChatRequest, ChatResponse};
pub use message::{ChatMessage, ChatRole};
pub use row_set::{CellValue, RowSet};
pub use session::{ChatOutcome, ChatSession, FALLBACK_ANSWER};
