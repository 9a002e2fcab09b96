//! Analyst Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for the /api/chat endpoint
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatInterface
//! - message_bubble.rs: Component for a single conversation turn
//! - data_table.rs: Component for tabular query results

mod data_table;
mod message_bubble;
mod model;
mod view;
mod view_model;

pub use data_table::DataTable;
pub use message_bubble::MessageBubble;
pub use view::ChatInterface;
pub use view_model::ChatVm;
