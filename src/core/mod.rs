//! # Core Module
//!
//! Configuration, error taxonomy, user-facing notices and reply payloads.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod messages;
pub mod reply;

// Re-export commonly used items
pub use config::Config;
pub use error::{AckPhase, CommandError, Denial, ProtocolError, ResourceKind};
pub use messages::Notice;
pub use reply::{Control, ControlStyle, FieldStyle, Modal, ModalField, Panel, Reply};
