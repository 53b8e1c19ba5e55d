//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod pipeline;
pub mod registry;
pub mod slash;

use anyhow::anyhow;
use log::warn;

use crate::core::CommandError;
use crate::interaction::InteractionSession;

pub use context::CommandContext;
pub use handler::SlashCommandHandler;
pub use registry::CommandRegistry;
pub use slash::{create_slash_commands, register_global_commands, register_guild_commands};

/// Run the registered handler for the session's command
pub async fn dispatch(registry: &CommandRegistry, ctx: &CommandContext, session: &mut InteractionSession) {
    let name = session.invocation().name.clone();
    match registry.get(&name) {
        Some(handler) => pipeline::execute(handler.as_ref(), ctx, session).await,
        None => {
            warn!("[{}] Unknown command: {name}", session.invocation().request_id);
            let err = CommandError::Unexpected(anyhow!("no handler registered for /{name}"));
            pipeline::report_failure(session, &err).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Notice;
    use crate::testing::{invocation, Sent, TestDeps};

    #[tokio::test]
    async fn test_unknown_command_gets_generic_notice() {
        let deps = TestDeps::default();
        let (mut session, responder) = deps.session(invocation("does_not_exist"));

        dispatch(&CommandRegistry::with_default_handlers(), &deps.context(), &mut session).await;

        match responder.sent().as_slice() {
            [Sent::Create(reply)] => {
                assert_eq!(reply.content, Some(Notice::GenericFailure.render()))
            }
            other => panic!("unexpected responses: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_registered_handler() {
        let deps = TestDeps::default();
        let (mut session, responder) = deps.session(invocation("save_activity"));

        dispatch(&CommandRegistry::with_default_handlers(), &deps.context(), &mut session).await;

        // Plain member: deferred, then denied
        assert!(matches!(
            responder.sent().as_slice(),
            [Sent::Defer { ephemeral: true }, Sent::Edit(_)]
        ));
        assert!(deps.activity.calls().is_empty());
    }
}
