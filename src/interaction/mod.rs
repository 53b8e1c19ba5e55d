//! # Interaction Layer
//!
//! Request-scoped interaction data, the acknowledgment protocol, and the
//! platform responder seam.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod invocation;
pub mod responder;
pub mod session;

pub use invocation::{Invocation, InvokingUser, MemberInfo, OptionValue};
pub use responder::{InteractionResponder, PlatformInteraction, SerenityResponder};
pub use session::{AckMode, AckState, InteractionSession, ACK_WINDOW, TOKEN_LIFETIME};
