//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod activity;
pub mod nickname;
pub mod recruitment;

use std::sync::Arc;

use super::context::CommandContext;
use super::handler::SlashCommandHandler;
use crate::core::{CommandError, Denial};
use crate::interaction::Invocation;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(nickname::NicknameSetupHandler),
        Arc::new(recruitment::RecruitmentHandler),
        Arc::new(activity::SaveActivityHandler),
    ]
}

/// Voice-forum feature gate shared by the recruitment-side commands
pub(crate) fn require_recruitment_permission(
    ctx: &CommandContext,
    invocation: &Invocation,
) -> Result<(), CommandError> {
    if ctx
        .voice_forum
        .has_recruitment_permission(&invocation.user, invocation.member.as_ref())
    {
        Ok(())
    } else {
        Err(CommandError::PermissionDenied(Denial::Feature))
    }
}
