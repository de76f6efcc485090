//! Session domain module.
//!
//! This module contains the share-view session model, the conversation
//! lookup built from a public session, the sorted session list projection,
//! and the source trait the application layer fetches sessions through.
//!
//! # Module Structure
//!
//! - `model`: Session fields observed by the view (`Session`)
//! - `message`: Conversation message types (`SenderRole`, `RawMessage`, `Message`)
//! - `conversation`: Two-level conversation lookup (`ConversationIndex`)
//! - `list_view`: Sorted session projection (`SessionListView`, `SessionList`)
//! - `public`: Wire shape of the public session endpoint (`PublicSession`)
//! - `source`: Trait for fetching remote session state (`SessionSource`)
//!
//! # Usage
//!
//! ```ignore
//! use vchat_core::session::{ConversationIndex, Session, SessionSource};
//! use vchat_core::session::{Message, SenderRole, SessionListView};
//! ```

mod conversation;
mod list_view;
mod message;
mod model;
mod public;
mod source;

// Re-export public API
pub use conversation::ConversationIndex;
pub use list_view::{SessionList, SessionListView};
pub use message::{INPUT_MSG_TYPE, Message, RawMessage, SenderRole};
pub use model::Session;
pub use public::PublicSession;
pub use source::SessionSource;
