//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;

use super::context::CommandContext;
use crate::core::CommandError;
use crate::interaction::{AckMode, InteractionSession, Invocation};

/// One or more slash commands sharing a handler
///
/// Handlers only describe their stages; `pipeline::execute` runs them in
/// order (acknowledge, authorize, run) and turns any error into a single
/// user-facing notice.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn ack_mode(&self, _invocation: &Invocation) -> AckMode {
///         AckMode::None
///     }
///
///     fn authorize(&self, _ctx: &CommandContext, _invocation: &Invocation) -> Result<(), CommandError> {
///         Ok(())
///     }
///
///     async fn run(&self, _ctx: &CommandContext, session: &mut InteractionSession) -> Result<(), CommandError> {
///         session.respond(Reply::text("Pong!")).await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// How the interaction is acknowledged before authorization
    fn ack_mode(&self, invocation: &Invocation) -> AckMode;

    /// Feature-level check on the invoking user; must not touch the network
    fn authorize(&self, ctx: &CommandContext, invocation: &Invocation) -> Result<(), CommandError>;

    /// Resolve, check resource permissions, delegate, confirm
    async fn run(
        &self,
        ctx: &CommandContext,
        session: &mut InteractionSession,
    ) -> Result<(), CommandError>;
}
