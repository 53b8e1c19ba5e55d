// Core layer - configuration, errors, notices, reply payloads
pub mod core;

// Interaction layer - acknowledgment protocol and platform responder
pub mod interaction;

// UI construction - control ids, panels, serenity builders
pub mod ui;

// External collaborators and their default implementations
pub mod services;

// Application layer
pub mod commands;
pub mod message_components;

#[cfg(test)]
pub(crate) mod testing;

pub use core::Config;
