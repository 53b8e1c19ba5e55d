//! /recruitment: open the standalone or a special recruitment form
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::debug;

use super::require_recruitment_permission;
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::{CommandError, ResourceKind};
use crate::interaction::{AckMode, InteractionSession, Invocation};
use crate::services::RecruitmentKind;

pub const OPTION_TYPE: &str = "type";

pub struct RecruitmentHandler;

#[async_trait]
impl SlashCommandHandler for RecruitmentHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["recruitment"]
    }

    // The answer is a modal, which cannot follow a defer
    fn ack_mode(&self, _invocation: &Invocation) -> AckMode {
        AckMode::None
    }

    fn authorize(&self, ctx: &CommandContext, invocation: &Invocation) -> Result<(), CommandError> {
        require_recruitment_permission(ctx, invocation)
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        session: &mut InteractionSession,
    ) -> Result<(), CommandError> {
        let request_id = session.invocation().request_id;

        match session.invocation().integer_option(OPTION_TYPE) {
            None => {
                debug!("[{request_id}] Opening standalone recruitment form");
                ctx.voice_forum
                    .show_standalone_recruitment_modal(session)
                    .await
                    .map_err(CommandError::delegate)?;
            }
            Some(value) => {
                let kind = RecruitmentKind::from_option(value).ok_or_else(|| {
                    CommandError::invalid(ResourceKind::RecruitmentType, value.to_string())
                })?;
                debug!("[{request_id}] Opening {} recruitment form", kind.as_str());
                ctx.voice_forum
                    .recruitment_service()
                    .handle_special_recruitment_button(session, kind)
                    .await
                    .map_err(CommandError::delegate)?;
            }
        }
        Ok(())
    }
}
